//! Playback engine: transport controls over a recorded trace.

use std::time::Duration;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::{AdvanceToken, ScheduledAdvance, ViewState};
use crate::schema::{
    Algorithm, ConfigError, SnapshotGenerator, Value, VisualizerConfig, validate_array_size,
    validate_speed,
};
use crate::trace::{Trace, TraceError, generate};

/// Transport state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No trace loaded.
    #[default]
    Idle,
    /// Trace loaded; advances only on `step()`.
    Paused,
    /// Trace loaded; advancing automatically.
    Playing,
    /// Every event applied. Only `reset()` leaves this state.
    Completed,
}

/// What `reset()` does with the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetMode {
    /// Show the snapshot the current trace was generated from.
    #[default]
    Restore,
    /// Replace the snapshot with freshly generated values.
    Regenerate,
}

/// Owns the snapshot, the active trace and the view derived from it.
///
/// All mutation goes through the transport methods and [`fire`](Self::fire).
///
/// Usage:
/// ```ignore
/// let mut engine = PlaybackEngine::new(VisualizerConfig::default())?;
/// engine.start();
/// while let Some(next) = engine.pending_advance() {
///     std::thread::sleep(next.delay);
///     engine.fire(next.token);
/// }
/// ```
pub struct PlaybackEngine {
    config: VisualizerConfig,
    generator: SnapshotGenerator,
    snapshot: Vec<Value>,
    view: ViewState,
    trace: Option<Trace>,
    state: PlaybackState,
    /// Bumped on every cancellation; invalidates outstanding tokens.
    epoch: u64,
    next_seq: u64,
    pending: Option<ScheduledAdvance>,
}

impl PlaybackEngine {
    /// Create an engine with a randomly generated snapshot of `config.array_size`.
    pub fn new(config: VisualizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut generator = SnapshotGenerator::from_config(&config);
        let snapshot = generator.generate(config.array_size);
        Ok(Self::from_parts(config, generator, snapshot))
    }

    /// Create an engine over an explicit snapshot of any length.
    ///
    /// `config.array_size` still governs later regenerations.
    pub fn with_snapshot(
        config: VisualizerConfig,
        snapshot: Vec<Value>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = SnapshotGenerator::from_config(&config);
        Ok(Self::from_parts(config, generator, snapshot))
    }

    fn from_parts(
        config: VisualizerConfig,
        generator: SnapshotGenerator,
        snapshot: Vec<Value>,
    ) -> Self {
        Self {
            config,
            generator,
            view: ViewState::new(snapshot.clone()),
            snapshot,
            trace: None,
            state: PlaybackState::Idle,
            epoch: 0,
            next_seq: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Active trace, if one is loaded.
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Array the next trace will be generated from.
    pub fn snapshot(&self) -> &[Value] {
        &self.snapshot
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    pub fn speed(&self) -> u32 {
        self.config.speed
    }

    pub fn array_size(&self) -> usize {
        self.config.array_size
    }

    /// Delay used for the next scheduled advance.
    pub fn step_delay(&self) -> Duration {
        self.config.step_delay()
    }

    /// Events applied from the active trace.
    pub fn cursor(&self) -> usize {
        self.view.cursor()
    }

    /// Length of the active trace (0 when idle).
    pub fn total_steps(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    /// Comparisons performed by the active trace (0 when idle).
    pub fn comparisons(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::comparisons)
    }

    /// Swaps performed by the active trace (0 when idle).
    pub fn swaps(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::swaps)
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Whether a trace is loaded (paused, playing or completed).
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state != PlaybackState::Idle
    }

    /// The armed automatic advance, present only while playing.
    pub fn pending_advance(&self) -> Option<ScheduledAdvance> {
        self.pending
    }

    /// Start from idle, or toggle between playing and paused.
    pub fn start(&mut self) -> PlaybackState {
        match self.state {
            PlaybackState::Idle => {
                if self.load_trace() {
                    self.play();
                }
            }
            PlaybackState::Playing => self.halt(),
            PlaybackState::Paused => self.play(),
            PlaybackState::Completed => debug!("start ignored: trace completed, reset first"),
        }
        self.state
    }

    /// Stop automatic advancement, keeping the cursor. No-op unless playing.
    pub fn pause(&mut self) -> PlaybackState {
        if self.state == PlaybackState::Playing {
            self.halt();
        }
        self.state
    }

    /// Continue automatic advancement. No-op unless paused.
    pub fn resume(&mut self) -> PlaybackState {
        if self.state == PlaybackState::Paused {
            self.play();
        }
        self.state
    }

    /// Apply exactly one event, loading a trace first when idle.
    pub fn step(&mut self) -> PlaybackState {
        match self.state {
            PlaybackState::Idle => {
                if self.load_trace() {
                    self.transition(PlaybackState::Paused);
                    self.apply_next();
                }
            }
            PlaybackState::Paused => self.apply_next(),
            PlaybackState::Playing | PlaybackState::Completed => {
                debug!("step ignored while {:?}", self.state);
            }
        }
        self.state
    }

    /// Discard the trace and return to idle.
    pub fn reset(&mut self, mode: ResetMode) {
        self.cancel_pending();
        self.trace = None;
        if mode == ResetMode::Regenerate {
            self.snapshot = self.generator.generate(self.config.array_size);
        }
        self.view.reset(self.snapshot.clone());
        self.transition(PlaybackState::Idle);
    }

    /// Replace the snapshot with freshly generated values.
    pub fn regenerate(&mut self) {
        self.reset(ResetMode::Regenerate);
    }

    /// Replace the snapshot with `values`, resetting any active run.
    pub fn set_snapshot(&mut self, values: Vec<Value>) {
        self.snapshot = values;
        self.reset(ResetMode::Restore);
    }

    /// Select the algorithm for the next run, resetting any active run.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.is_active() {
            self.reset(ResetMode::Restore);
        }
        self.config.algorithm = algorithm;
    }

    /// Select the algorithm by identifier. Unknown names leave the engine untouched.
    pub fn set_algorithm_by_name(&mut self, name: &str) -> Result<(), TraceError> {
        let algorithm = name
            .parse::<Algorithm>()
            .inspect_err(|e| warn!("{}", e))?;
        self.set_algorithm(algorithm);
        Ok(())
    }

    /// Change the array size and generate a new snapshot of that size.
    pub fn set_array_size(&mut self, size: usize) -> Result<(), ConfigError> {
        validate_array_size(size)?;
        self.config.array_size = size;
        self.reset(ResetMode::Regenerate);
        Ok(())
    }

    /// Change the speed. Only advances armed after this call use the new delay.
    pub fn set_speed(&mut self, speed: u32) -> Result<(), ConfigError> {
        validate_speed(speed)?;
        self.config.speed = speed;
        Ok(())
    }

    /// Timer callback for an advance published by [`pending_advance`](Self::pending_advance).
    ///
    /// Returns `false` without touching any state when the token is stale.
    pub fn fire(&mut self, token: AdvanceToken) -> bool {
        let live = self.state == PlaybackState::Playing
            && self.pending.is_some_and(|p| p.token == token);
        if !live {
            trace!("dropping stale advance {:?}", token);
            return false;
        }

        self.pending = None;
        self.apply_next();
        if self.state == PlaybackState::Playing {
            self.arm();
        }
        true
    }

    /// Generate a trace for the current snapshot. Returns false if there is nothing to play.
    fn load_trace(&mut self) -> bool {
        let trace = generate(&self.snapshot, self.config.algorithm);
        if trace.is_empty() {
            debug!("{} produced no events; staying idle", self.config.algorithm);
            return false;
        }

        self.view.reset(self.snapshot.clone());
        self.view.begin(trace.len());
        self.trace = Some(trace);
        true
    }

    fn play(&mut self) {
        self.transition(PlaybackState::Playing);
        self.apply_next();
        if self.state == PlaybackState::Playing {
            self.arm();
        }
    }

    fn halt(&mut self) {
        self.cancel_pending();
        self.transition(PlaybackState::Paused);
    }

    /// Apply the event under the cursor; completes the run when it was the last.
    fn apply_next(&mut self) {
        let Some(trace) = self.trace.as_ref() else {
            return;
        };
        let total = trace.len();
        let Some(event) = trace.get(self.view.cursor()).copied() else {
            return;
        };

        if let Err(e) = self.view.apply(&event) {
            warn!("skipping {}: {}", event, e);
        }

        if self.view.cursor() >= total {
            self.cancel_pending();
            self.view.clear_highlight();
            self.transition(PlaybackState::Completed);
        }
    }

    fn arm(&mut self) {
        self.next_seq += 1;
        self.pending = Some(ScheduledAdvance {
            token: AdvanceToken {
                epoch: self.epoch,
                seq: self.next_seq,
            },
            delay: self.config.step_delay(),
        });
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            trace!("cancelled pending advance at cursor {}", self.view.cursor());
        }
        self.epoch += 1;
    }

    fn transition(&mut self, next: PlaybackState) {
        if self.state != next {
            debug!(
                "{:?} -> {:?} (cursor {}/{})",
                self.state,
                next,
                self.view.cursor(),
                self.total_steps()
            );
        }
        self.state = next;
    }
}
