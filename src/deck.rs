//! A single 52-card deck.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered stack of cards. The top of the deck is the end of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order.
    ///
    /// Canonical order is every rank of Hearts, then Diamonds, Clubs and
    /// Spades, each from Two up to Ace. Nothing is shuffled.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self { cards: Vec::new() };
        deck.reset();
        deck
    }

    /// Creates a deck holding exactly `cards`, with the last card on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Refills the deck with all 52 cards in canonical order.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards in place (Fisher-Yates).
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut a = Deck::new();
    /// let mut b = Deck::new();
    /// a.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    /// b.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// assert_ne!(a, Deck::new());
    /// ```
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Empty`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::Empty)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck with {} cards", self.cards.len())
    }
}
