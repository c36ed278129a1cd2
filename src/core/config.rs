//! Game configuration and setup validation.
//!
//! The only configurable rules are the players (count and names) and the
//! starting life. The shell validates raw input with the `validate_*`
//! helpers and re-prompts; `GameConfig::validate` runs the same checks once
//! more before a game is built, so the engine only ever sees valid setups.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game can start with (two cards each from a 40-card deck).
pub const MAX_PLAYERS: usize = 20;
/// Lowest starting life.
pub const MIN_LIFE: u32 = 2;
/// Highest starting life.
pub const MAX_LIFE: u32 = 10;
/// Starting life when none is configured.
pub const DEFAULT_LIFE: u32 = 5;
/// Longest allowed player name, in characters.
pub const MAX_NAME_LEN: usize = 14;

/// Setup validation failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("between {} and {} players can play, got {}", MIN_PLAYERS, MAX_PLAYERS, .0)]
    PlayerCount(usize),

    #[error("player name must not be empty")]
    EmptyName,

    #[error("player name {:?} is longer than {} characters", .name, MAX_NAME_LEN)]
    NameTooLong { name: String },

    #[error("player name {name:?} may only contain visible characters")]
    NameNotPrintable { name: String },

    #[error("starting life must be between {} and {}, got {}", MIN_LIFE, MAX_LIFE, .0)]
    StartingLife(u32),
}

/// Check a player count.
pub fn validate_player_count(count: usize) -> Result<(), ConfigError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(ConfigError::PlayerCount(count))
    }
}

/// Check a player name: 1 to `MAX_NAME_LEN` characters, no whitespace or
/// control characters.
pub fn validate_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ConfigError::NameTooLong { name: name.to_string() });
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ConfigError::NameNotPrintable { name: name.to_string() });
    }
    Ok(())
}

/// Check a starting life total.
pub fn validate_life(life: u32) -> Result<(), ConfigError> {
    if (MIN_LIFE..=MAX_LIFE).contains(&life) {
        Ok(())
    } else {
        Err(ConfigError::StartingLife(life))
    }
}

/// Complete game configuration.
///
/// ```
/// use king_of_cards::core::GameConfig;
///
/// let config = GameConfig::new(["Ada", "Bo", "Cy"])
///     .with_starting_life(3)
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in seating order.
    pub names: Vec<String>,

    /// Life every player starts with.
    pub starting_life: u32,

    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for the given players with default life.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            starting_life: DEFAULT_LIFE,
            seed: None,
        }
    }

    /// Set the starting life.
    #[must_use]
    pub fn with_starting_life(mut self, life: u32) -> Self {
        self.starting_life = life;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    /// Run every setup check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_player_count(self.names.len())?;
        for name in &self.names {
            validate_name(name)?;
        }
        validate_life(self.starting_life)
    }
}
