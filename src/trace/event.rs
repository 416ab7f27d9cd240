//! Animation events and the traces that hold them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TraceError;
use crate::schema::{Algorithm, Value};

/// A single observable step of a sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// Indices `i` and `j` were compared; no value changed.
    Compare { i: usize, j: usize },
    /// Values at `i` and `j` were exchanged.
    Swap { i: usize, j: usize },
    /// The value at `index` was set to `value`.
    Overwrite { index: usize, value: Value },
    /// `index` holds its final value.
    Sorted { index: usize },
}

impl Event {
    /// Indices this event highlights, if any.
    pub fn highlight(&self) -> Option<[usize; 2]> {
        match *self {
            Event::Compare { i, j } | Event::Swap { i, j } => Some([i, j]),
            Event::Overwrite { .. } | Event::Sorted { .. } => None,
        }
    }

    /// Apply the value-level effect of this event to `values`.
    ///
    /// Compare and Sorted events leave `values` untouched but are still bounds-checked.
    pub fn apply_to(&self, values: &mut [Value]) -> Result<(), TraceError> {
        let len = values.len();
        let check = |index: usize| {
            if index < len {
                Ok(())
            } else {
                Err(TraceError::IndexOutOfBounds { index, len })
            }
        };

        match *self {
            Event::Compare { i, j } => {
                check(i)?;
                check(j)
            }
            Event::Swap { i, j } => {
                check(i)?;
                check(j)?;
                values.swap(i, j);
                Ok(())
            }
            Event::Overwrite { index, value } => {
                check(index)?;
                values[index] = value;
                Ok(())
            }
            Event::Sorted { index } => check(index),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Compare { i, j } => write!(f, "compare({}, {})", i, j),
            Event::Swap { i, j } => write!(f, "swap({}, {})", i, j),
            Event::Overwrite { index, value } => write!(f, "overwrite({} = {})", index, value),
            Event::Sorted { index } => write!(f, "sorted({})", index),
        }
    }
}

/// Recorded event sequence for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    algorithm: Algorithm,
    events: Vec<Event>,
    comparisons: usize,
    swaps: usize,
}

impl Trace {
    pub(crate) fn new(
        algorithm: Algorithm,
        events: Vec<Event>,
        comparisons: usize,
        swaps: usize,
    ) -> Self {
        Self {
            algorithm,
            events,
            comparisons,
            swaps,
        }
    }

    /// Algorithm that produced this trace.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// All events in recording order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Event at `index`, if within the trace.
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total comparisons performed.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Total swaps performed.
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
