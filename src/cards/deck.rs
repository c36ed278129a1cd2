//! The 40-card deck.
//!
//! A new deck is built for every round, shuffled, and consumed two cards
//! at a time from the top (the end of the backing `Vec`).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// An ordered deck. Top of the deck = end of the vec.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full set in canonical order: suit-major, rank-minor.
    #[must_use]
    pub fn canonical() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Build the canonical set and shuffle it.
    ///
    /// Fisher-Yates: walking down from the last index, swap each slot with a
    /// uniformly chosen slot at or below it. Every ordering is equally likely
    /// given a uniform source.
    #[must_use]
    pub fn new_shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::canonical();
        for i in (1..deck.cards.len()).rev() {
            let j = rng.gen_range_usize(0..i + 1);
            deck.cards.swap(i, j);
        }
        deck
    }

    /// A full deck whose next draws are `top[0]`, `top[1]`, ... in order.
    ///
    /// The remaining cards sit underneath in canonical order. Used for
    /// fixtures and replays where the deal must be known in advance.
    ///
    /// Panics if `top` repeats a card.
    #[must_use]
    pub fn stacked(top: &[Card]) -> Self {
        let on_top: FxHashSet<Card> = top.iter().copied().collect();
        assert_eq!(on_top.len(), top.len(), "Stacked cards must be distinct");

        let mut cards: Vec<Card> = Self::canonical()
            .cards
            .into_iter()
            .filter(|card| !on_top.contains(card))
            .collect();
        cards.extend(top.iter().rev().copied());
        Self { cards }
    }

    /// Remove the top two cards.
    ///
    /// The first card popped is returned first. `None` if fewer than two
    /// cards remain.
    pub fn draw_two(&mut self) -> Option<(Card, Card)> {
        if self.cards.len() < 2 {
            return None;
        }
        let first = self.cards.pop()?;
        let second = self.cards.pop()?;
        Some((first, second))
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck exhausted?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
