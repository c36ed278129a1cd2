//! Two-card hands.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Which card of a hand is being referred to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSlot {
    /// Face-up card, resolved automatically at the start of the turn.
    Primary,
    /// Hidden card, the holder's defense until revealed.
    Secondary,
}

impl std::fmt::Display for CardSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardSlot::Primary => f.write_str("card 1"),
            CardSlot::Secondary => f.write_str("card 2"),
        }
    }
}

/// A player's hand for one round.
///
/// `secondary_revealed` only ever goes from false to true within a round;
/// `conceal` resets it when a new round is dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub primary: Card,
    pub secondary: Card,
    pub secondary_revealed: bool,
}

impl Hand {
    /// A freshly dealt hand with the secondary hidden.
    #[must_use]
    pub const fn new(primary: Card, secondary: Card) -> Self {
        Self {
            primary,
            secondary,
            secondary_revealed: false,
        }
    }

    /// Get the card in a slot.
    #[must_use]
    pub const fn card(&self, slot: CardSlot) -> Card {
        match slot {
            CardSlot::Primary => self.primary,
            CardSlot::Secondary => self.secondary,
        }
    }

    /// Reveal the secondary.
    ///
    /// Returns the card if it was hidden, `None` if it had already been
    /// revealed this round.
    pub fn reveal(&mut self) -> Option<Card> {
        if self.secondary_revealed {
            return None;
        }
        self.secondary_revealed = true;
        Some(self.secondary)
    }

    /// Hide the secondary again for a new round.
    pub fn conceal(&mut self) {
        self.secondary_revealed = false;
    }

    /// The secondary as seen by the table: `None` while hidden.
    #[must_use]
    pub fn visible_secondary(&self) -> Option<Card> {
        self.secondary_revealed.then_some(self.secondary)
    }
}
