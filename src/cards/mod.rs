//! Cards, the deck, and hands.
//!
//! ## Key Types
//!
//! - `Card`: A (suit, rank) value from the 40-card set
//! - `Deck`: Per-round shuffled deck, drawn two cards at a time
//! - `Hand`: Primary and secondary card with the secondary's reveal flag

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use hand::{CardSlot, Hand};
