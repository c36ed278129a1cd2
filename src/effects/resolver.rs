//! Effect resolution - applying a card's rank to the game state.
//!
//! Resolution is a small state machine with two states, `Resolving` and
//! `Done`. Every rank except Seven goes straight to `Done`. A Seven reveals
//! the next player's hidden card and moves back to `Resolving` with that
//! card and that player as the new actor, so a chain of Sevens walks around
//! the table until it reaches a card that is not a Seven or a secondary that
//! is already face up.
//!
//! Each hop reveals a different hidden card, so a chain is at most as long
//! as the number of active players.

use smallvec::SmallVec;

use crate::cards::{Card, Rank};
use crate::core::{GameState, PlayerId};

use super::EffectEvent;

/// Events produced by one resolution (one per hop of a Seven chain).
pub type Resolution = SmallVec<[EffectEvent; 2]>;

/// Resolver state.
#[derive(Clone, Copy)]
enum Step {
    Resolving { seat: usize, card: Card },
    Done,
}

/// Resolves card effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `card` as played by the player in `seat`.
    ///
    /// Mutates life totals, the shared pool, and reveal flags, and returns
    /// what happened in order.
    ///
    /// Panics if there are no active players or a Seven reaches a player
    /// without a hand; both mean the caller is resolving outside a round.
    pub fn resolve(state: &mut GameState, seat: usize, card: Card) -> Resolution {
        assert!(
            !state.roster.is_empty(),
            "Cannot resolve effects with no active players"
        );

        let mut events = Resolution::new();
        let mut hops = 0;
        let mut step = Step::Resolving { seat, card };

        while let Step::Resolving { seat, card } = step {
            step = Self::resolve_step(state, seat, card, &mut events);
            if matches!(step, Step::Resolving { .. }) {
                hops += 1;
                debug_assert!(
                    hops <= state.active_count(),
                    "Seven chain longer than the table"
                );
            }
        }

        events
    }

    /// Apply a single card and decide whether resolution continues.
    fn resolve_step(
        state: &mut GameState,
        seat: usize,
        card: Card,
        events: &mut Resolution,
    ) -> Step {
        let actor = state.roster.at(seat);

        match card.rank {
            Rank::Ace => {
                let lost = state.roster.player_mut(actor).lose_life(1);
                state.pool += 1;
                log::debug!("{} deposits a life point, pool {}", state.name(actor), state.pool);
                events.push(EffectEvent::AceDeposit { actor, lost, pool: state.pool });
                Step::Done
            }

            Rank::Seven => {
                let next = state.roster.next(seat);
                let target = state.roster.at(next);
                let revealed = state.roster.player_mut(target).dealt_hand_mut().reveal();
                match revealed {
                    Some(revealed) => {
                        log::debug!(
                            "{} reveals {} of {}",
                            state.name(actor),
                            revealed,
                            state.name(target)
                        );
                        events.push(EffectEvent::SevenReveal { actor, target, card: revealed });
                        Step::Resolving { seat: next, card: revealed }
                    }
                    None => {
                        log::debug!("{}'s seven fizzles", state.name(actor));
                        events.push(EffectEvent::SevenFizzle { actor, target });
                        Step::Done
                    }
                }
            }

            Rank::Jack => {
                let to = state.roster.at(state.roster.prev(seat));
                let lost = Self::transfer(state, actor, to);
                events.push(EffectEvent::JackTransfer { actor, to, lost });
                Step::Done
            }

            Rank::Queen if state.active_count() == 2 => {
                log::debug!("{}'s queen is nullified heads-up", state.name(actor));
                events.push(EffectEvent::QueenNullified { actor });
                Step::Done
            }

            Rank::Queen => {
                let to = state.roster.at(state.roster.next2(seat));
                let lost = Self::transfer(state, actor, to);
                events.push(EffectEvent::QueenTransfer { actor, to, lost });
                Step::Done
            }

            Rank::King if state.pool > 0 => {
                let amount = std::mem::take(&mut state.pool);
                state.roster.player_mut(actor).gain_life(amount);
                log::debug!("{} claims {} from the pool", state.name(actor), amount);
                events.push(EffectEvent::KingClaim { actor, amount });
                Step::Done
            }

            Rank::King => {
                events.push(EffectEvent::KingEmpty { actor });
                Step::Done
            }

            Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => {
                events.push(EffectEvent::NoEffect { actor, card });
                Step::Done
            }
        }
    }

    /// Move one life point from `from` to `to`.
    ///
    /// The loss is floored at zero but the gain always happens.
    fn transfer(state: &mut GameState, from: PlayerId, to: PlayerId) -> u32 {
        let lost = state.roster.player_mut(from).lose_life(1);
        state.roster.player_mut(to).gain_life(1);
        log::debug!("{} passes a life point to {}", state.name(from), state.name(to));
        lost
    }
}
