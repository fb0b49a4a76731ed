//! Player representation and turn status.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::hand::Hand;

/// A player's status within the current hand.
///
/// Transitions are monotonic: `Active` may become `Stuck` or `Bust`, and
/// both of those are terminal until the next hand begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Player is still eligible to act this hand.
    Active,
    /// Player has stuck and locked in their score.
    Stuck,
    /// Player has busted (over 21).
    Bust,
}

/// A participant in the game.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name, fixed when the player joins.
    name: String,
    /// Cards held this hand.
    hand: Hand,
    /// Current turn status.
    status: PlayerStatus,
}

impl Player {
    /// Creates a new active player with an empty hand.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            hand: Hand::new(),
            status: PlayerStatus::Active,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's current status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns whether the player has neither stuck nor busted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Returns the score of the player's hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.hand.score()
    }

    /// Adds a card to the player's hand and re-evaluates bust.
    pub fn take_card(&mut self, card: Card) {
        self.hand.add_card(card);

        if self.hand.is_bust() {
            self.status = PlayerStatus::Bust;
        }
    }

    /// Locks in the current hand. No further cards will be offered.
    pub const fn stick(&mut self) {
        self.status = PlayerStatus::Stuck;
    }

    /// Discards the hand and returns the player to `Active` for a new hand.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.status = PlayerStatus::Active;
    }
}
