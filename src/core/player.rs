//! Players and the active roster.
//!
//! ## PlayerId
//!
//! Stable identity assigned at setup. Never reused, never renumbered.
//!
//! ## Roster
//!
//! Arena of every player who joined plus the ordered view of the players
//! still in the game. Seats (positions in that view) are what effects target;
//! they are recomputed whenever eliminated players are swept out.

use serde::{Deserialize, Serialize};

use crate::cards::Hand;

/// Stable player identifier supporting up to 255 players.
///
/// Indices are 0-based in setup order: the first name entered is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw arena index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub life: u32,
    /// Position among active players. `None` once eliminated.
    pub seat: Option<usize>,
    /// Current hand. `None` before the first deal.
    pub hand: Option<Hand>,
}

impl Player {
    /// Is this player still in the game?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.seat.is_some()
    }

    /// Lose up to `amount` life, never dropping below zero.
    ///
    /// Returns the life actually lost.
    pub fn lose_life(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.life);
        self.life -= lost;
        lost
    }

    /// Gain life.
    pub fn gain_life(&mut self, amount: u32) {
        self.life += amount;
    }

    /// Current hand.
    ///
    /// Panics if no hand has been dealt yet; effects only run mid-round.
    #[must_use]
    pub fn dealt_hand(&self) -> &Hand {
        match &self.hand {
            Some(hand) => hand,
            None => panic!("{} has not been dealt a hand", self.name),
        }
    }

    /// Mutable access to the current hand. Same contract as `dealt_hand`.
    pub fn dealt_hand_mut(&mut self) -> &mut Hand {
        match &mut self.hand {
            Some(hand) => hand,
            None => panic!("{} has not been dealt a hand", self.name),
        }
    }
}

/// Result of sweeping eliminated players out of the roster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sweep {
    /// Removed players, in the order they were seated.
    pub eliminated: Vec<PlayerId>,
    /// The last player removed in this pass, if any.
    pub last_eliminated: Option<PlayerId>,
}

/// All players plus the ordered view of those still active.
///
/// ## Example
///
/// ```
/// use king_of_cards::core::Roster;
///
/// let roster = Roster::new(["Ada", "Bo", "Cy"], 5);
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster.next(2), 0);
/// assert_eq!(roster.prev(0), 2);
/// assert_eq!(roster.next2(1), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Every player, indexed by `PlayerId`.
    players: Vec<Player>,
    /// Active players in seat order.
    active: Vec<PlayerId>,
}

impl Roster {
    /// Seat players in the given order, all starting at `starting_life`.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>, starting_life: u32) -> Self {
        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                assert!(i < 255, "At most 255 players supported");
                Player {
                    id: PlayerId(i as u8),
                    name: name.into(),
                    life: starting_life,
                    seat: Some(i),
                    hand: None,
                }
            })
            .collect();
        let active = players.iter().map(|p| p.id).collect();
        Self { players, active }
    }

    /// Number of active players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Has everyone been eliminated?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active players in seat order.
    #[must_use]
    pub fn active(&self) -> &[PlayerId] {
        &self.active
    }

    /// Every player who joined, including eliminated ones.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Active players in seat order.
    pub fn survivors(&self) -> impl Iterator<Item = &Player> {
        self.active.iter().map(|&id| &self.players[id.index()])
    }

    /// Player occupying `seat`.
    #[must_use]
    pub fn at(&self, seat: usize) -> PlayerId {
        self.active[seat]
    }

    /// Look up a player by identity.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable lookup by identity.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Player occupying `seat`.
    #[must_use]
    pub fn seated(&self, seat: usize) -> &Player {
        self.player(self.at(seat))
    }

    /// Mutable access to the player occupying `seat`.
    pub fn seated_mut(&mut self, seat: usize) -> &mut Player {
        let id = self.at(seat);
        self.player_mut(id)
    }

    // === Positional helpers (modulo active count) ===

    /// Seat after `seat`.
    #[must_use]
    pub fn next(&self, seat: usize) -> usize {
        (seat + 1) % self.len()
    }

    /// Seat before `seat`.
    #[must_use]
    pub fn prev(&self, seat: usize) -> usize {
        let n = self.len();
        (seat + n - 1) % n
    }

    /// Two seats after `seat`.
    #[must_use]
    pub fn next2(&self, seat: usize) -> usize {
        (seat + 2) % self.len()
    }

    // === Round bookkeeping ===

    /// Hide every active player's secondary card.
    pub fn conceal_all(&mut self) {
        for &id in &self.active {
            if let Some(hand) = self.players[id.index()].hand.as_mut() {
                hand.conceal();
            }
        }
    }

    /// Remove active players with no life left and renumber the rest.
    ///
    /// Survivors keep their relative order and are reseated `0..k`.
    /// When everyone is removed the roster ends up empty and
    /// `Sweep::last_eliminated` names the last one removed.
    pub fn contract(&mut self) -> Sweep {
        let mut sweep = Sweep::default();
        let mut survivors = Vec::with_capacity(self.active.len());

        for &id in &self.active {
            let player = &mut self.players[id.index()];
            if player.life > 0 {
                player.seat = Some(survivors.len());
                survivors.push(id);
            } else {
                player.seat = None;
                sweep.eliminated.push(id);
                sweep.last_eliminated = Some(id);
            }
        }

        self.active = survivors;
        sweep
    }
}
