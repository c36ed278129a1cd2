//! Game state that outlives a single round.
//!
//! - Roster (every player, plus the active seat order)
//! - Shared pool of life deposited by Aces
//! - Round counter
//! - Last eliminated player, for the simultaneous-wipe tie-break
//!
//! Decks and reveal flags are per-round and live with the round orchestrator
//! and the hands respectively.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, Roster, Sweep};

/// Persistent game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// All players and the active seat order.
    pub roster: Roster,

    /// Life points on the field. Aces deposit, Kings claim everything.
    pub pool: u32,

    /// Current round number (starts at 1).
    pub round: u32,

    /// Most recently eliminated player.
    pub last_eliminated: Option<PlayerId>,
}

impl GameState {
    /// Start a game with an empty pool at round 1.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            pool: 0,
            round: 1,
            last_eliminated: None,
        }
    }

    /// Number of players still in the game.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.roster.len()
    }

    /// Look up a player by identity.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.roster.player(id)
    }

    /// Display name of a player.
    #[must_use]
    pub fn name(&self, id: PlayerId) -> &str {
        &self.roster.player(id).name
    }

    /// Sweep out players at zero life and remember the last one removed.
    pub fn sweep(&mut self) -> Sweep {
        let sweep = self.roster.contract();
        if sweep.last_eliminated.is_some() {
            self.last_eliminated = sweep.last_eliminated;
        }
        sweep
    }

    /// Advance to the next round.
    pub fn advance_round(&mut self) {
        self.round += 1;
    }
}
