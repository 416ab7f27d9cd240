//! Deferred advancement: tokens, clocks and the driving loop.
//!
//! The engine never sleeps. While playing it publishes a [`ScheduledAdvance`]
//! describing when the next event is due; whoever owns the timer waits out the
//! delay and hands the token back through [`PlaybackEngine::fire`]. Pausing or
//! resetting invalidates the token, so a callback already in flight becomes a
//! no-op.

use std::thread;
use std::time::Duration;

use super::PlaybackEngine;

/// Identifies one armed advance. Tokens from a cancelled schedule never match again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceToken {
    pub(crate) epoch: u64,
    pub(crate) seq: u64,
}

/// The next automatic step and how long to wait before firing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub token: AdvanceToken,
    pub delay: Duration,
}

/// Source of waiting between automatic steps.
pub trait Clock {
    /// Block (or pretend to) for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock waits on the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Virtual clock that only accumulates the requested waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time waited so far.
    pub fn now(&self) -> Duration {
        self.now
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
    }
}

/// Fire scheduled advances until the engine stops playing.
///
/// Returns the number of events applied by fired advances.
pub fn run_until_settled<C: Clock>(engine: &mut PlaybackEngine, clock: &mut C) -> usize {
    run_within(engine, clock, None)
}

/// Fire scheduled advances whose cumulative delay fits within `budget`.
///
/// Playback stays in whatever state it reached, typically still playing with
/// the next advance armed.
pub fn run_for<C: Clock>(engine: &mut PlaybackEngine, clock: &mut C, budget: Duration) -> usize {
    run_within(engine, clock, Some(budget))
}

fn run_within<C: Clock>(
    engine: &mut PlaybackEngine,
    clock: &mut C,
    budget: Option<Duration>,
) -> usize {
    let mut spent = Duration::ZERO;
    let mut applied = 0;

    while let Some(next) = engine.pending_advance() {
        if budget.is_some_and(|b| spent + next.delay > b) {
            break;
        }
        clock.sleep(next.delay);
        spent += next.delay;

        if !engine.fire(next.token) {
            break;
        }
        applied += 1;
    }

    applied
}
