//! Rounds and the game loop.
//!
//! ## Key Types
//!
//! - `Round`: One deal, one turn per active player, one sweep
//! - `Game`: Rounds until one player is left (or the last one to fall)
//! - `GameResult`: Winner and how they won
//!
//! Neither type blocks for input. Both stop on a `DecisionRequest` and
//! resume when answered.

pub mod engine;
pub mod round;

pub use engine::{Game, GameError, GameResult, Progress, VictoryKind};
pub use round::{Round, RoundOutcome, RoundStatus};

/// Rules summary shown to players before the first deal.
pub const RULES: &str = "\
1. Every player starts with the same number of life points.
2. Each round every player is dealt two cards: one face up, one face down.
3. On your turn your face-up card takes effect. You may then reveal your
   face-down card, and once it is face up choose whether to apply its effect.
   A face-up card no longer protects you from a 7.
4. Card effects:
   - Ace:   lose 1 life point and put it on the field
   - 2 to 6: no effect
   - 7:     reveal the next player's face-down card and apply its effect for them
   - Jack:  give 1 life point to the previous player
   - Queen: give 1 life point to the player two seats ahead (no effect heads-up)
   - King:  take every life point on the field
5. At the end of the round every player at 0 life is eliminated.
6. The last player standing wins. If everyone falls together, the last of
   them in turn order wins.
";
