//! Narrative events.
//!
//! The engine reports everything that happens as a stream of events. They
//! are the only observable output besides the mutated state, and carry
//! enough data (actor, target, amounts, resulting pool) for a renderer to
//! tell the story without re-deriving it.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardSlot};
use crate::core::PlayerId;
use crate::rules::GameResult;

/// Outcome of resolving one card.
///
/// `lost` fields hold the life actually taken from the actor, which is less
/// than the nominal 1 when the actor was already at zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectEvent {
    /// Ace: the actor put a life point on the field.
    AceDeposit { actor: PlayerId, lost: u32, pool: u32 },

    /// Two through Six.
    NoEffect { actor: PlayerId, card: Card },

    /// Seven: the next player's hidden card was revealed and resolves next.
    SevenReveal { actor: PlayerId, target: PlayerId, card: Card },

    /// Seven: the next player's card was already revealed.
    SevenFizzle { actor: PlayerId, target: PlayerId },

    /// Jack: life moved to the previous player.
    JackTransfer { actor: PlayerId, to: PlayerId, lost: u32 },

    /// Queen with only two players left.
    QueenNullified { actor: PlayerId },

    /// Queen: life moved to the player two seats ahead.
    QueenTransfer { actor: PlayerId, to: PlayerId, lost: u32 },

    /// King: the actor took the whole pool.
    KingClaim { actor: PlayerId, amount: u32 },

    /// King on an empty field.
    KingEmpty { actor: PlayerId },
}

impl EffectEvent {
    /// The player the effect was resolved for.
    #[must_use]
    pub fn actor(&self) -> PlayerId {
        match self {
            EffectEvent::AceDeposit { actor, .. }
            | EffectEvent::NoEffect { actor, .. }
            | EffectEvent::SevenReveal { actor, .. }
            | EffectEvent::SevenFizzle { actor, .. }
            | EffectEvent::JackTransfer { actor, .. }
            | EffectEvent::QueenNullified { actor }
            | EffectEvent::QueenTransfer { actor, .. }
            | EffectEvent::KingClaim { actor, .. }
            | EffectEvent::KingEmpty { actor } => *actor,
        }
    }
}

/// Everything the engine reports, in the order it happens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round began. `pool` is the life on the field at that moment.
    RoundStarted { round: u32, pool: u32 },

    /// Randomly chosen first player of the round.
    FirstPlayer { player: PlayerId },

    /// A player's turn began (hands are dealt by now).
    TurnStarted { player: PlayerId },

    /// A card is about to be resolved.
    CardChecked { player: PlayerId, slot: CardSlot },

    /// A card effect resolved.
    Effect(EffectEvent),

    /// A player turned their own hidden card face up.
    Revealed { player: PlayerId, card: Card },

    /// A player chose to keep their hidden card face down.
    CardKept { player: PlayerId },

    /// A player revealed their hidden card but chose not to apply it.
    EffectDeclined { player: PlayerId },

    /// The player's hidden card was already revealed by an opponent's Seven.
    DefenseSpent { player: PlayerId },

    /// Every active player has taken their turn.
    RoundEnded { round: u32 },

    /// A player was swept out at zero life.
    Eliminated { player: PlayerId },

    /// The game is decided.
    GameOver(GameResult),
}

impl From<EffectEvent> for GameEvent {
    fn from(event: EffectEvent) -> Self {
        GameEvent::Effect(event)
    }
}
