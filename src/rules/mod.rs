//! Turn resolution and match end conditions.
//!
//! - `turn`: run one player's strategy against the board
//! - `end`: decide whether, and why, a match is over
//!
//! The match controller in `game` owns the counters these read and calls
//! both once per turn.

pub mod end;
pub mod turn;

pub use end::{check_end, EndCause, MatchStatus, TurnCounters};
pub use turn::{resolve_turn, TurnReport};
