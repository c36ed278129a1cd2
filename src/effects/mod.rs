//! Card effects and the events they produce.
//!
//! - `EffectResolver`: Applies a card's rank to the game state
//! - `EffectEvent`: What one resolved card did
//! - `GameEvent`: The full narrative stream (rounds, turns, effects, eliminations)
//!
//! ## Effect table
//!
//! | Rank | Effect |
//! |---|---|
//! | Ace | Actor loses 1, pool gains 1 |
//! | 2-6 | Nothing |
//! | Seven | Reveal the next player's hidden card and resolve it as them |
//! | Jack | Actor gives 1 to the previous player |
//! | Queen | Actor gives 1 to the player two seats ahead (nothing heads-up) |
//! | King | Actor takes the whole pool |

mod event;
mod resolver;

pub use event::{EffectEvent, GameEvent};
pub use resolver::{EffectResolver, Resolution};
