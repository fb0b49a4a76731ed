//! Winner computation for a finished hand.

use alloc::vec::Vec;

use crate::error::OutcomeError;
use crate::outcome::{HandResult, PlayerStanding};
use crate::player::PlayerStatus;

use super::{Game, GameState};

impl Game {
    /// Computes the outcome of a finished hand.
    ///
    /// This is a read-only pass over the registry:
    /// 1. Every player's final cards, score, and status become a standing.
    /// 2. The winners are exactly the non-bust players tied for the
    ///    highest score.
    /// 3. If every player busted, there is no winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has not finished.
    pub fn outcome(&self) -> Result<HandResult, OutcomeError> {
        if self.state != GameState::HandOver {
            return Err(OutcomeError::HandNotOver);
        }

        let standings: Vec<PlayerStanding> = self
            .players
            .iter()
            .map(|player| PlayerStanding {
                name: player.name().into(),
                cards: player.hand().cards().to_vec(),
                score: player.score(),
                status: player.status(),
            })
            .collect();

        let winning_score = standings
            .iter()
            .filter(|standing| standing.status != PlayerStatus::Bust)
            .map(|standing| standing.score)
            .max();

        let winners = winning_score.map_or_else(Vec::new, |best| {
            standings
                .iter()
                .enumerate()
                .filter(|(_, standing)| {
                    standing.status != PlayerStatus::Bust && standing.score == best
                })
                .map(|(index, _)| index)
                .collect()
        });

        Ok(HandResult {
            standings,
            winners,
            winning_score,
            cards_remaining: self.deck.len(),
        })
    }
}
