//! The match engine.
//!
//! - [`MatchEngine`]: owns the round, takes input, drives collaborators
//! - [`RoundState`]: cards, flipped buffer, matched set, processing lock
//! - [`Scheduler`]: resolution delays on a host-advanced virtual clock
//!
//! ## Flip state machine
//!
//! ```text
//!   Idle --select--> OneFlipped --select--> Resolving
//!    ^                                         |
//!    +------ match_delay / mismatch_delay -----+
//! ```
//!
//! While `Resolving`, every selection is ignored. A match moves both
//! cards into the matched set; a mismatch turns them back over. When the
//! last pair is found the win sequence runs once, `win_delay` later.

mod machine;
mod schedule;
mod state;

pub use machine::{IgnoreReason, MatchEngine, MatchEngineBuilder, Selection, Startup, Visibility};
pub use schedule::{Scheduled, Scheduler, Task};
pub use state::{MachineState, Progress, RoundState};
