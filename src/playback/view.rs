//! Render-facing view of an in-progress animation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::schema::Value;
use crate::trace::{Event, TraceError};

/// Array contents and highlight sets as of the playback cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    array: Vec<Value>,
    highlighted: BTreeSet<usize>,
    sorted: BTreeSet<usize>,
    cursor: usize,
    total_steps: usize,
    comparisons_shown: usize,
    swaps_shown: usize,
}

impl ViewState {
    /// Fresh view over `array` with no trace loaded.
    pub fn new(array: Vec<Value>) -> Self {
        Self {
            array,
            ..Default::default()
        }
    }

    /// Current array contents.
    pub fn array(&self) -> &[Value] {
        &self.array
    }

    /// Indices touched by the most recent compare or swap.
    pub fn highlighted(&self) -> &BTreeSet<usize> {
        &self.highlighted
    }

    /// Indices finalized so far.
    pub fn sorted(&self) -> &BTreeSet<usize> {
        &self.sorted
    }

    #[inline]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    #[inline]
    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    /// Number of events applied.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the loaded trace (0 when none is loaded).
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Compare events applied so far.
    pub fn comparisons_shown(&self) -> usize {
        self.comparisons_shown
    }

    /// Swap events applied so far.
    pub fn swaps_shown(&self) -> usize {
        self.swaps_shown
    }

    /// Fraction of the trace applied, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.total_steps == 0 {
            0.0
        } else {
            self.cursor as f64 / self.total_steps as f64
        }
    }

    /// Whether every event of the loaded trace has been applied.
    pub fn is_complete(&self) -> bool {
        self.total_steps > 0 && self.cursor == self.total_steps
    }

    /// Prepare for a freshly generated trace of `total_steps` events.
    pub(crate) fn begin(&mut self, total_steps: usize) {
        self.total_steps = total_steps;
        self.cursor = 0;
        self.highlighted.clear();
        self.sorted.clear();
        self.comparisons_shown = 0;
        self.swaps_shown = 0;
    }

    /// Drop all trace-derived state and show `array`.
    pub(crate) fn reset(&mut self, array: Vec<Value>) {
        *self = Self::new(array);
    }

    pub(crate) fn clear_highlight(&mut self) {
        self.highlighted.clear();
    }

    /// Apply one event and advance the cursor.
    ///
    /// The cursor advances even when the event is rejected, so a bad event can
    /// never stall playback.
    pub fn apply(&mut self, event: &Event) -> Result<(), TraceError> {
        self.cursor += 1;
        event.apply_to(&mut self.array)?;

        if let Some(indices) = event.highlight() {
            self.highlighted = BTreeSet::from(indices);
        }

        match *event {
            Event::Compare { .. } => self.comparisons_shown += 1,
            Event::Swap { .. } => self.swaps_shown += 1,
            Event::Overwrite { .. } => {}
            Event::Sorted { index } => {
                self.sorted.insert(index);
            }
        }
        Ok(())
    }
}
