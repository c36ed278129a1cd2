//! The game loop.
//!
//! `Game` runs rounds until at most one player is left. Like `Round`, it is
//! driven from outside: `advance` runs until someone must answer a question,
//! `answer` supplies the reply. `play` wraps both for a synchronous
//! `DecisionMaker`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Deck;
use crate::core::{ConfigError, DecisionMaker, DecisionRequest, GameConfig, GameRng, GameState, PlayerId, Roster};
use crate::effects::GameEvent;

use super::round::{Round, RoundStatus};

/// How the winner won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryKind {
    /// Only player left with life after a sweep.
    LastStanding,
    /// Everyone fell in the same sweep; the winner sat latest in turn order.
    LastEliminated,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub kind: VictoryKind,
    /// Rounds played, including the last one.
    pub rounds: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Misuse of the decision protocol.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no decision is pending")]
    NoPendingDecision,

    #[error("the game is already over")]
    GameOver,
}

/// What `Game::advance` stopped on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// A player must answer through `Game::answer`.
    Decision(DecisionRequest),
    /// The game is over.
    Finished(GameResult),
}

/// A whole game, from the first deal to the last sweep.
///
/// ```
/// use king_of_cards::core::{FixedAnswer, GameConfig};
/// use king_of_cards::rules::Game;
///
/// let config = GameConfig::new(["Ada", "Bo", "Cy"]).with_seed(7);
/// let mut game = Game::new(&config).unwrap();
///
/// let result = game.play(&mut FixedAnswer(false));
/// assert_eq!(game.result(), Some(&result));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    rng: GameRng,
    round: Option<Round>,
    stacked: Option<Round>,
    events: Vec<GameEvent>,
    result: Option<GameResult>,
}

impl Game {
    /// Validate the configuration and seat the players.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::info!(
            "new game: {} players, {} life each, seed {}",
            config.player_count(),
            config.starting_life,
            rng.seed()
        );

        let roster = Roster::new(config.names.iter().cloned(), config.starting_life);
        Ok(Self::with_state(GameState::new(roster), rng))
    }

    /// Resume from an existing state, e.g. a fixture with uneven life totals.
    ///
    /// # Panics
    ///
    /// Panics if no player is active.
    #[must_use]
    pub fn with_state(state: GameState, rng: GameRng) -> Self {
        assert!(!state.roster.is_empty(), "Cannot start a game with no active players");
        Self {
            state,
            rng,
            round: None,
            stacked: None,
            events: Vec::new(),
            result: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Seed of the game's RNG, for replaying it.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Fix the deck order and first seat of the next round to be dealt.
    pub fn stack_next_round(&mut self, deck: Deck, first_seat: usize) {
        self.stacked = Some(Round::stacked(deck, first_seat));
    }

    /// Take every event produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run until a decision is needed or the game ends.
    pub fn advance(&mut self) -> Progress {
        loop {
            if let Some(result) = &self.result {
                return Progress::Finished(result.clone());
            }
            if self.round.is_none() && self.conclude() {
                continue;
            }

            let stacked = &mut self.stacked;
            let round = self.round.get_or_insert_with(|| stacked.take().unwrap_or_default());

            match round.step(&mut self.state, &mut self.rng, &mut self.events) {
                RoundStatus::AwaitingDecision(request) => return Progress::Decision(request),
                RoundStatus::Complete(outcome) => {
                    log::debug!(
                        "round {} swept {} player(s)",
                        outcome.round,
                        outcome.sweep.eliminated.len()
                    );
                    self.round = None;
                    if !self.conclude() {
                        self.state.advance_round();
                    }
                }
            }
        }
    }

    /// Answer the pending decision.
    pub fn answer(&mut self, yes: bool) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        match self.round.as_mut() {
            Some(round) => round.answer(&mut self.state, yes, &mut self.events),
            None => Err(GameError::NoPendingDecision),
        }
    }

    /// Play the game to the end, asking `maker` every question and showing
    /// it every event.
    pub fn play(&mut self, maker: &mut impl DecisionMaker) -> GameResult {
        loop {
            let progress = self.advance();
            for event in self.events.drain(..) {
                maker.notify(&self.state, &event);
            }

            match progress {
                Progress::Finished(result) => return result,
                Progress::Decision(request) => {
                    let yes = maker.decide(&self.state, &request);
                    if let Err(err) = self.answer(yes) {
                        unreachable!("answer to a pending decision was rejected: {err}");
                    }
                }
            }
        }
    }

    /// Record the result if at most one player is left. Returns whether the
    /// game is over.
    fn conclude(&mut self) -> bool {
        let (winner, kind) = match self.state.roster.active() {
            [] => match self.state.last_eliminated {
                Some(player) => (player, VictoryKind::LastEliminated),
                None => unreachable!("roster emptied without an elimination"),
            },
            [player] => (*player, VictoryKind::LastStanding),
            _ => return false,
        };

        let result = GameResult {
            winner,
            kind,
            rounds: self.state.round,
        };
        log::info!(
            "{} wins after {} round(s) ({:?})",
            self.state.name(winner),
            result.rounds,
            kind
        );
        self.events.push(GameEvent::GameOver(result.clone()));
        self.result = Some(result);
        true
    }
}
