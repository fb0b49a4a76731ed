//! A pontoon (twenty-one) card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full flow of a hand:
//! gathering players, dealing, the stick/twist turn cycle, and the final
//! winner computation.
//!
//! # Example
//!
//! ```no_run
//! use pontoon::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod player;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, JoinError, OutcomeError, ReshuffleError, TurnError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use outcome::{HandResult, PlayerStanding};
pub use player::{Player, PlayerStatus};
