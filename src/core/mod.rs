//! Core engine types: players, state, decisions, RNG, configuration.
//!
//! Everything here is independent of card effects; the `effects` and
//! `rules` modules build the game on top of it.

pub mod player;
pub mod rng;
pub mod config;
pub mod decision;
pub mod state;

pub use player::{Player, PlayerId, Roster, Sweep};
pub use rng::GameRng;
pub use config::{
    validate_life, validate_name, validate_player_count, ConfigError, GameConfig,
    DEFAULT_LIFE, MAX_LIFE, MAX_NAME_LEN, MAX_PLAYERS, MIN_LIFE, MIN_PLAYERS,
};
pub use decision::{DecisionKind, DecisionMaker, DecisionRequest, FixedAnswer};
pub use state::GameState;
