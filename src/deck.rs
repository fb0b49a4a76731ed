//! Deck construction, shuffling, and dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered pile of cards, dealt from the top.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards. The last element is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck containing the specified number of
    /// full 52-card packs.
    #[must_use]
    pub fn standard(packs: u8) -> Self {
        let mut cards = Vec::with_capacity(packs as usize * DECK_SIZE);

        for _ in 0..packs {
            for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Creates a deck with an exact card order.
    ///
    /// The last card of `cards` is the top of the deck and will be dealt
    /// first. Intended for reproducing known deals in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Randomly permutes the remaining cards. No cards are added or removed.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` if the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
