//! Game engine and state management.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{DealError, JoinError, ReshuffleError};
use crate::options::GameOptions;
use crate::player::Player;

mod actions;
mod outcome;
pub mod state;

pub use state::GameState;

/// A pontoon game engine that manages the deck, the player registry, and
/// the flow of each hand.
///
/// One `Game` owns one deck and one ordered set of players for the whole
/// session; the deck persists across hands and is reshuffled between hands
/// once the penetration threshold is reached. Use [`GameOptions`] to
/// configure the number of packs and the penetration.
pub struct Game {
    /// Cards remaining in the deck. Exposed so tests can stack known deals.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// All players, in joining order.
    players: Vec<Player>,
    /// Index of the player currently acting.
    current_turn: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck.
    ///
    /// The seed makes the whole session reproducible.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pontoon::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard(options.packs);
        deck.shuffle(&mut rng);

        Self {
            deck,
            options,
            state: GameState::WaitingForPlayers,
            players: Vec::new(),
            current_turn: 0,
            rng,
        }
    }

    /// Adds a player to the registry.
    ///
    /// Returns the player's index. Name validation (non-empty) is the
    /// caller's concern; the name-entry loop uses an empty line as its
    /// terminator before ever calling this.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in progress.
    pub fn add_player(&mut self, name: &str) -> Result<usize, JoinError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(JoinError::HandInProgress);
        }

        self.players.push(Player::new(String::from(name)));
        Ok(self.players.len() - 1)
    }

    /// Deals two cards to every player and starts the turn cycle.
    ///
    /// Both cards go to each player in registry order before the next
    /// player is served. The first player becomes the current player and
    /// the game enters [`GameState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is already in progress, no players have
    /// joined, or the deck cannot cover two cards per player.
    pub fn deal_initial(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(DealError::InvalidState);
        }

        if self.players.is_empty() {
            return Err(DealError::NoPlayers);
        }

        let cards_needed = self.players.len() * 2;
        if self.deck.len() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        for player in &mut self.players {
            for _ in 0..2 {
                if let Some(card) = self.deck.deal() {
                    player.take_card(card);
                }
            }
        }

        self.current_turn = 0;
        self.state = GameState::PlayerTurn;

        Ok(())
    }

    /// Reshuffles the deck back to the full pack count.
    ///
    /// # Errors
    ///
    /// Returns an error if players still hold cards (a hand in progress or
    /// not yet cleared).
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(ReshuffleError::InvalidState);
        }

        self.deck = Deck::standard(self.options.packs);
        self.deck.shuffle(&mut self.rng);

        Ok(())
    }

    /// Returns whether the deck needs reshuffling based on penetration.
    ///
    /// Returns `true` if the consumed fraction of the deck has reached the
    /// penetration threshold. If penetration is 0, always returns `false`.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        if self.options.penetration == 0.0 {
            return false;
        }

        let total_cards = self.options.packs as usize * DECK_SIZE;
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.deck.len() as f64 / total_cards as f64);

        used_ratio >= self.options.penetration
    }

    /// Checks penetration and reshuffles if needed.
    ///
    /// Call this between hands, before dealing. Returns `true` if a
    /// reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.deal()
    }

    /// Returns the number of players in the registry.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns all players, in joining order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at the given index.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the index of the player whose turn it is.
    ///
    /// Returns `None` outside of [`GameState::PlayerTurn`].
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        match self.state {
            GameState::PlayerTurn => Some(self.current_turn),
            _ => None,
        }
    }

    /// Clears all hands and statuses for the next hand.
    ///
    /// The registry and the deck are kept; the game returns to
    /// [`GameState::WaitingForPlayers`].
    pub fn clear_hand(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.current_turn = 0;
        self.state = GameState::WaitingForPlayers;
    }
}
