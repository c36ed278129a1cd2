//! One round of play.
//!
//! A round moves through `Dealing → TurnLoop → Sweeping → Done`. It is
//! resumable: `step` runs until a player has to answer a question and hands
//! back the request; `answer` feeds the reply in and the next `step` carries
//! on from the same point.

use serde::{Deserialize, Serialize};

use crate::cards::{CardSlot, Deck, Hand, DECK_SIZE};
use crate::core::{DecisionRequest, GameRng, GameState, PlayerId, Sweep};
use crate::effects::{EffectResolver, GameEvent};

use super::GameError;

/// Where a turn is within the hidden-card interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum TurnStep {
    /// Resolve the primary card.
    Start,
    /// Waiting on "reveal the hidden card?".
    AwaitReveal,
    /// Waiting on "apply its effect?". The card is already face up.
    AwaitApply,
    /// Turn over, hand off to the next seat.
    End,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum Phase {
    Dealing,
    TurnLoop { turn: usize, seat: usize, step: TurnStep },
    Sweeping,
    Done(RoundOutcome),
}

/// What a finished round did to the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round number that just finished.
    pub round: u32,
    /// Players swept out at the end of the round.
    pub sweep: Sweep,
}

/// Status returned by `Round::step`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// A player must answer before the round can continue.
    AwaitingDecision(DecisionRequest),
    /// The round is over and eliminated players have been swept.
    Complete(RoundOutcome),
}

/// A single round's state machine.
///
/// Owns the round's deck; the deck is discarded with the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    phase: Phase,
    deck: Option<Deck>,
    first_seat: Option<usize>,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    /// A round that shuffles a fresh deck and picks a random first player.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Dealing,
            deck: None,
            first_seat: None,
        }
    }

    /// A round with a fixed deck order and first seat.
    #[must_use]
    pub fn stacked(deck: Deck, first_seat: usize) -> Self {
        Self {
            phase: Phase::Dealing,
            deck: Some(deck),
            first_seat: Some(first_seat),
        }
    }

    /// Seat that plays first. `None` until the round has been dealt.
    #[must_use]
    pub fn first_seat(&self) -> Option<usize> {
        match self.phase {
            Phase::Dealing => None,
            _ => self.first_seat,
        }
    }

    /// Cards left in the deck after dealing. `None` before dealing.
    #[must_use]
    pub fn remaining_cards(&self) -> Option<usize> {
        match self.phase {
            Phase::Dealing => None,
            _ => self.deck.as_ref().map(Deck::len),
        }
    }

    /// Has the round been swept?
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done(_))
    }

    /// Run until a decision is needed or the round ends.
    pub fn step(
        &mut self,
        state: &mut GameState,
        rng: &mut GameRng,
        events: &mut Vec<GameEvent>,
    ) -> RoundStatus {
        loop {
            match &self.phase {
                Phase::Dealing => {
                    let first = self.deal(state, rng, events);
                    self.phase = Phase::TurnLoop { turn: 0, seat: first, step: TurnStep::Start };
                }

                Phase::TurnLoop { turn, seat, step } => {
                    let (turn, seat, step) = (*turn, *seat, *step);
                    let player = state.roster.at(seat);
                    match step {
                        TurnStep::Start => {
                            let next = Self::play_primary(state, seat, events);
                            self.phase = Phase::TurnLoop { turn, seat, step: next };
                        }
                        TurnStep::AwaitReveal => {
                            return RoundStatus::AwaitingDecision(DecisionRequest::reveal(player));
                        }
                        TurnStep::AwaitApply => {
                            let card = state.player(player).dealt_hand().secondary;
                            return RoundStatus::AwaitingDecision(DecisionRequest::apply(player, card));
                        }
                        TurnStep::End if turn + 1 == state.active_count() => {
                            events.push(GameEvent::RoundEnded { round: state.round });
                            self.phase = Phase::Sweeping;
                        }
                        TurnStep::End => {
                            let seat = state.roster.next(seat);
                            self.phase = Phase::TurnLoop { turn: turn + 1, seat, step: TurnStep::Start };
                        }
                    }
                }

                Phase::Sweeping => {
                    let sweep = state.sweep();
                    for &player in &sweep.eliminated {
                        log::info!("{} is eliminated", state.name(player));
                        events.push(GameEvent::Eliminated { player });
                    }
                    self.phase = Phase::Done(RoundOutcome { round: state.round, sweep });
                }

                Phase::Done(outcome) => return RoundStatus::Complete(outcome.clone()),
            }
        }
    }

    /// Answer the pending decision.
    pub fn answer(
        &mut self,
        state: &mut GameState,
        yes: bool,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), GameError> {
        let Phase::TurnLoop { turn, seat, step } = self.phase else {
            return Err(GameError::NoPendingDecision);
        };
        let player = state.roster.at(seat);

        let next = match (step, yes) {
            (TurnStep::AwaitReveal, true) => match state.roster.player_mut(player).dealt_hand_mut().reveal() {
                Some(card) => {
                    log::debug!("{} reveals {card}", state.name(player));
                    events.push(GameEvent::Revealed { player, card });
                    TurnStep::AwaitApply
                }
                None => TurnStep::End,
            },
            (TurnStep::AwaitReveal, false) => {
                events.push(GameEvent::CardKept { player });
                TurnStep::End
            }
            (TurnStep::AwaitApply, true) => {
                Self::apply_secondary(state, seat, player, events);
                TurnStep::End
            }
            (TurnStep::AwaitApply, false) => {
                events.push(GameEvent::EffectDeclined { player });
                TurnStep::End
            }
            (TurnStep::Start | TurnStep::End, _) => return Err(GameError::NoPendingDecision),
        };

        self.phase = Phase::TurnLoop { turn, seat, step: next };
        Ok(())
    }

    /// Shuffle, pick the first seat, and deal two cards to every active player.
    ///
    /// Returns the first seat.
    fn deal(&mut self, state: &mut GameState, rng: &mut GameRng, events: &mut Vec<GameEvent>) -> usize {
        let count = state.active_count();
        assert!(count > 0, "Cannot deal a round with no players");
        assert!(2 * count <= DECK_SIZE, "Too many players for one deck");

        state.roster.conceal_all();
        let mut deck = self.deck.take().unwrap_or_else(|| Deck::new_shuffled(rng));
        let first = self.first_seat.unwrap_or_else(|| rng.gen_index(count));
        assert!(first < count, "First seat {first} out of range for {count} players");

        log::info!("round {} begins with {} on the field", state.round, state.pool);
        log::info!("{} plays first", state.roster.seated(first).name);
        events.push(GameEvent::RoundStarted { round: state.round, pool: state.pool });
        events.push(GameEvent::FirstPlayer { player: state.roster.at(first) });

        let mut seat = first;
        for _ in 0..count {
            let Some((primary, secondary)) = deck.draw_two() else {
                unreachable!("deck ran out while dealing {count} players");
            };
            log::trace!("dealt {primary} and {secondary} to {}", state.roster.seated(seat).name);
            state.roster.seated_mut(seat).hand = Some(Hand::new(primary, secondary));
            seat = state.roster.next(seat);
        }

        self.deck = Some(deck);
        self.first_seat = Some(first);
        first
    }

    /// Resolve the primary card and work out what the turn needs next.
    fn play_primary(state: &mut GameState, seat: usize, events: &mut Vec<GameEvent>) -> TurnStep {
        let player = state.roster.at(seat);
        events.push(GameEvent::TurnStarted { player });
        events.push(GameEvent::CardChecked { player, slot: CardSlot::Primary });

        let primary = state.player(player).dealt_hand().card(CardSlot::Primary);
        let resolution = EffectResolver::resolve(state, seat, primary);
        events.extend(resolution.into_iter().map(GameEvent::from));

        if state.player(player).dealt_hand().secondary_revealed {
            events.push(GameEvent::DefenseSpent { player });
            TurnStep::End
        } else {
            TurnStep::AwaitReveal
        }
    }

    /// Resolve the secondary card the player has just revealed.
    fn apply_secondary(state: &mut GameState, seat: usize, player: PlayerId, events: &mut Vec<GameEvent>) {
        let card = state.player(player).dealt_hand().card(CardSlot::Secondary);
        events.push(GameEvent::CardChecked { player, slot: CardSlot::Secondary });
        let resolution = EffectResolver::resolve(state, seat, card);
        events.extend(resolution.into_iter().map(GameEvent::from));
    }
}
