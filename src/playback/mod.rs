//! Step-wise and timed playback of sorting traces.
//!
//! [`PlaybackEngine`] owns the snapshot, the active [`Trace`](crate::trace::Trace)
//! and a [`ViewState`] that a renderer reads. Transport follows
//!
//! ```text
//! Idle --start--> Playing <--start/pause/resume--> Paused
//!   |                |                                |
//!   +-----step-------|------------> Paused            |
//!                    +---- last event applied ----> Completed
//! any --reset--> Idle
//! ```
//!
//! Automatic advancement is cooperative: see [`scheduler`] for the token
//! protocol and the [`run_until_settled`] driver.

mod engine;
pub mod scheduler;
mod view;

pub use engine::{PlaybackEngine, PlaybackState, ResetMode};
pub use scheduler::{
    AdvanceToken, Clock, ManualClock, ScheduledAdvance, SystemClock, run_for, run_until_settled,
};
pub use view::ViewState;
