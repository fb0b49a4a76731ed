//! Hand result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::player::PlayerStatus;

/// A single player's final position after a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    /// The player's name.
    pub name: String,
    /// The cards held at the end of the hand.
    pub cards: Vec<Card>,
    /// The final hand score.
    pub score: u8,
    /// The final status (`Stuck` or `Bust`).
    pub status: PlayerStatus,
}

/// Result of a finished hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    /// Final standings for every player, in registry order.
    pub standings: Vec<PlayerStanding>,
    /// Indices into `standings` of the winning players.
    ///
    /// Non-bust players tied for the highest score are joint winners.
    /// Empty when every player busted.
    pub winners: Vec<usize>,
    /// The winning score, or `None` when every player busted.
    pub winning_score: Option<u8>,
    /// Cards left in the deck after the hand.
    pub cards_remaining: usize,
}
