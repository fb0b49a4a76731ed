//! Stick/twist actions and round progression.

use crate::card::Card;
use crate::error::TurnError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self, player: usize) -> Result<(), TurnError> {
        if self.state != GameState::PlayerTurn {
            return Err(TurnError::InvalidState);
        }

        if player >= self.players.len() {
            return Err(TurnError::PlayerNotFound);
        }

        if player != self.current_turn {
            return Err(TurnError::NotYourTurn);
        }

        if !self.players[player].is_active() {
            return Err(TurnError::PlayerNotActive);
        }

        Ok(())
    }

    /// Player action: Twist (draw one more card).
    ///
    /// The card is appended to the player's hand and bust is re-evaluated.
    /// Whether or not the player busts, the turn moves on to the next
    /// active player; a surviving twister becomes eligible again on the
    /// next pass of the round. When nobody is left active, the game enters
    /// [`GameState::HandOver`].
    ///
    /// Returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress, it is not the player's
    /// turn, the player cannot be found or has already stuck or busted,
    /// or the deck is exhausted. Deck exhaustion leaves the hand
    /// unresolved; callers should abandon it via
    /// [`Game::clear_hand`](super::Game::clear_hand).
    pub fn twist(&mut self, player: usize) -> Result<Card, TurnError> {
        self.ensure_player_turn(player)?;

        let card = self.draw().ok_or(TurnError::DeckExhausted)?;
        self.players[player].take_card(card);

        self.advance_turn();

        Ok(card)
    }

    /// Player action: Stick (lock in the current hand).
    ///
    /// The player takes no further part in the hand. The turn moves on to
    /// the next active player; when nobody is left active, the game enters
    /// [`GameState::HandOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress, it is not the player's
    /// turn, or the player cannot be found or has already stuck or busted.
    pub fn stick(&mut self, player: usize) -> Result<(), TurnError> {
        self.ensure_player_turn(player)?;

        self.players[player].stick();

        self.advance_turn();

        Ok(())
    }

    /// Moves the turn to the next active player in registry order,
    /// wrapping around past the last player.
    ///
    /// Scanning cyclically is what produces the round structure: each
    /// wrap-around is one pass over the (shrinking) active set. When no
    /// active player remains anywhere, the hand is over.
    fn advance_turn(&mut self) {
        let count = self.players.len();

        for offset in 1..=count {
            let index = (self.current_turn + offset) % count;
            if self.players[index].is_active() {
                self.current_turn = index;
                return;
            }
        }

        self.state = GameState::HandOver;
    }

    /// Returns the number of players still active in this hand.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Returns whether any player is still active in this hand.
    #[must_use]
    pub fn has_active_players(&self) -> bool {
        self.players.iter().any(|p| p.is_active())
    }
}
