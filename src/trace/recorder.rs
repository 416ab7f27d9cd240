//! Trace recorder: a working copy of the array that logs every access.

use std::cmp::Ordering;

use super::{Event, Trace};
use crate::schema::{Algorithm, Value};

/// Records events while an algorithm sorts a private copy of a snapshot.
///
/// Algorithms read and mutate the array only through this type, so the event
/// log and the counters stay in lockstep with what actually happened.
///
/// Usage:
/// ```ignore
/// let mut recorder = TraceRecorder::new(&snapshot);
/// if recorder.compare(0, 1) == Ordering::Greater {
///     recorder.swap(0, 1);
/// }
/// let trace = recorder.finish(Algorithm::Bubble);
/// ```
pub struct TraceRecorder {
    values: Vec<Value>,
    events: Vec<Event>,
    comparisons: usize,
    swaps: usize,
}

impl TraceRecorder {
    /// Create a recorder over a copy of `snapshot`.
    pub fn new(snapshot: &[Value]) -> Self {
        Self {
            values: snapshot.to_vec(),
            events: Vec::new(),
            comparisons: 0,
            swaps: 0,
        }
    }

    /// Number of elements being sorted.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current working copy.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Compare the values at `i` and `j`, recording the comparison.
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        self.record_compare(i, j);
        self.values[i].cmp(&self.values[j])
    }

    /// Record a comparison at `i`, `j` whose operands live outside the array.
    ///
    /// Merge compares heads of its temporary buffers; the event carries the
    /// positions those heads originally occupied.
    pub fn compare_external(&mut self, i: usize, j: usize, left: Value, right: Value) -> Ordering {
        self.record_compare(i, j);
        left.cmp(&right)
    }

    fn record_compare(&mut self, i: usize, j: usize) {
        self.comparisons += 1;
        self.events.push(Event::Compare { i, j });
    }

    /// Exchange the values at `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.swaps += 1;
        self.events.push(Event::Swap { i, j });
        self.values.swap(i, j);
    }

    /// Write `value` at `index`.
    pub fn overwrite(&mut self, index: usize, value: Value) {
        self.events.push(Event::Overwrite { index, value });
        self.values[index] = value;
    }

    /// Mark `index` as holding its final value.
    pub fn mark_sorted(&mut self, index: usize) {
        self.events.push(Event::Sorted { index });
    }

    /// Number of events recorded so far.
    pub fn events_recorded(&self) -> usize {
        self.events.len()
    }

    /// Finish recording and return the trace.
    pub fn finish(self, algorithm: Algorithm) -> Trace {
        Trace::new(algorithm, self.events, self.comparisons, self.swaps)
    }
}
