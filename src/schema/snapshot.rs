//! Random array snapshots for sorting runs.

use rand::prelude::*;

use super::{Value, VisualizerConfig};

/// Random number generator wrapper for snapshot generation.
pub struct SnapshotGenerator {
    rng: StdRng,
    low: Value,
    high: Value,
}

impl SnapshotGenerator {
    /// Create from seed, sampling values in `[low, high)`.
    pub fn new(seed: u64, value_range: (Value, Value)) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), value_range)
    }

    /// Create with random seed.
    pub fn random(value_range: (Value, Value)) -> Self {
        Self::with_rng(StdRng::from_entropy(), value_range)
    }

    /// Create from a configuration, honoring its optional seed.
    pub fn from_config(config: &VisualizerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::new(seed, config.value_range),
            None => Self::random(config.value_range),
        }
    }

    fn with_rng(rng: StdRng, (low, high): (Value, Value)) -> Self {
        // An empty range would make gen_range panic; fall back to a single value.
        let high = high.max(low.saturating_add(1));
        Self { rng, low, high }
    }

    /// Generate a snapshot of `size` values.
    pub fn generate(&mut self, size: usize) -> Vec<Value> {
        (0..size)
            .map(|_| self.rng.gen_range(self.low..self.high))
            .collect()
    }
}
