//! Sort Trace - Recorded sorting algorithm animations.
//!
//! This crate runs classic comparison sorts against a snapshot array while
//! recording every comparison, swap, overwrite and sorted-mark as an ordered
//! event, then replays those events onto a view state at a controlled pace.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: Algorithm identifiers, configuration and snapshot generation
//! - `trace`: Event recording and the six instrumented sorting algorithms
//! - `playback`: Transport state machine, view state and timed advancement
//!
//! # Example
//!
//! ```rust
//! use sort_trace::{
//!     schema::{Algorithm, VisualizerConfig},
//!     playback::{ManualClock, PlaybackEngine, PlaybackState, run_until_settled},
//! };
//!
//! let config = VisualizerConfig {
//!     algorithm: Algorithm::Merge,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! let mut engine = PlaybackEngine::new(config).unwrap();
//!
//! engine.start();
//! run_until_settled(&mut engine, &mut ManualClock::new());
//!
//! assert_eq!(engine.state(), PlaybackState::Completed);
//! assert!(engine.view().array().is_sorted());
//! println!(
//!     "{} steps, {} comparisons, {} swaps",
//!     engine.total_steps(),
//!     engine.comparisons(),
//!     engine.swaps()
//! );
//! ```

pub mod playback;
pub mod schema;
pub mod trace;

// Re-export commonly used types
pub use playback::{PlaybackEngine, PlaybackState, ResetMode, ViewState};
pub use schema::{Algorithm, VisualizerConfig};
pub use trace::{Event, Trace, TraceError};
