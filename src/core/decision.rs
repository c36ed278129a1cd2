//! Player decisions.
//!
//! The engine never blocks on input. When a turn reaches a choice it stops
//! and hands back a `DecisionRequest`; the caller answers yes or no and the
//! engine picks up where it left off. `DecisionMaker` packages that loop
//! for callers that can answer synchronously (the terminal shell, tests).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::state::GameState;
use crate::cards::Card;
use crate::effects::GameEvent;

/// The yes/no questions a player can be asked about their hidden card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    /// Turn the hidden card face up?
    Reveal,
    /// Apply the effect of the card just revealed?
    Apply,
}

/// A pending question for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Who must answer.
    pub player: PlayerId,
    /// What is being asked.
    pub kind: DecisionKind,
    /// The secondary card, included once it is face up.
    pub card: Option<Card>,
}

impl DecisionRequest {
    /// Ask `player` whether to reveal their hidden card.
    #[must_use]
    pub const fn reveal(player: PlayerId) -> Self {
        Self {
            player,
            kind: DecisionKind::Reveal,
            card: None,
        }
    }

    /// Ask `player` whether to apply the effect of `card`, which they just revealed.
    #[must_use]
    pub const fn apply(player: PlayerId, card: Card) -> Self {
        Self {
            player,
            kind: DecisionKind::Apply,
            card: Some(card),
        }
    }
}

/// Answers decisions synchronously and observes the game as it unfolds.
///
/// Modeled on a seat at the table: `decide` is called when the engine needs
/// an answer, `notify` for every event in order.
pub trait DecisionMaker {
    /// Answer a pending request.
    fn decide(&mut self, state: &GameState, request: &DecisionRequest) -> bool;

    /// Observe an event. Default: ignore it.
    fn notify(&mut self, _state: &GameState, _event: &GameEvent) {}
}

/// Answers every request the same way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl DecisionMaker for FixedAnswer {
    fn decide(&mut self, _state: &GameState, _request: &DecisionRequest) -> bool {
        self.0
    }
}
