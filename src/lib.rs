//! # king-of-cards
//!
//! A turn-based elimination card game for 2 to 20 players.
//!
//! Each round deals two cards from a 40-card deck to every player. The
//! face-up card always takes effect; the face-down card is a player's
//! defense, played by choice or exposed by an opponent's Seven. Life lost to
//! Aces collects on the field until a King claims it. Players at zero life
//! are swept out at the end of the round.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: The engine never reads input or prints. Questions come
//!    back as `DecisionRequest`s, everything that happens as `GameEvent`s.
//!
//! 2. **Deterministic**: All randomness goes through one seeded `GameRng`.
//!    The same seed and the same answers replay the same game.
//!
//! 3. **Stable Identity**: `PlayerId` never changes; seats are re-assigned
//!    only when the roster contracts at the end of a round.
//!
//! ## Modules
//!
//! - `core`: Players, roster, state, decisions, RNG, configuration
//! - `cards`: Cards, the deck, hands
//! - `effects`: Card effect resolution and the event stream
//! - `rules`: Round orchestration and the game loop

pub mod core;
pub mod cards;
pub mod effects;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Player, Roster,
    GameRng,
    GameConfig, ConfigError,
    DecisionKind, DecisionMaker, DecisionRequest, FixedAnswer,
    GameState,
};

pub use crate::cards::{Card, CardSlot, Deck, Hand, Rank, Suit};

pub use crate::effects::{EffectEvent, EffectResolver, GameEvent};

pub use crate::rules::{Game, GameError, GameResult, Progress, Round, RoundStatus, VictoryKind, RULES};
