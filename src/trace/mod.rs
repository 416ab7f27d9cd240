//! Trace generation for sorting algorithms.
//!
//! A [`Trace`] is the ordered list of [`Event`]s an algorithm produces while
//! sorting a private copy of a snapshot, plus its comparison and swap totals.
//!
//! # Example
//!
//! ```rust
//! use sort_trace::schema::Algorithm;
//! use sort_trace::trace::{generate, replay};
//!
//! let snapshot = vec![5, 3, 8, 1];
//! let trace = generate(&snapshot, Algorithm::Bubble);
//!
//! assert_eq!(trace.comparisons(), 6);
//! assert_eq!(trace.swaps(), 4);
//! assert_eq!(replay(&snapshot, trace.events()).unwrap(), vec![1, 3, 5, 8]);
//! ```

mod algorithms;
mod error;
mod event;
mod recorder;

pub use algorithms::*;
pub use error::TraceError;
pub use event::{Event, Trace};
pub use recorder::TraceRecorder;

use crate::schema::{Algorithm, Value};

/// Record the full event trace of `algorithm` sorting `snapshot`.
///
/// The snapshot is copied; the caller's slice is never touched.
pub fn generate(snapshot: &[Value], algorithm: Algorithm) -> Trace {
    let mut recorder = TraceRecorder::new(snapshot);

    match algorithm {
        Algorithm::Bubble => bubble_sort(&mut recorder),
        Algorithm::Selection => selection_sort(&mut recorder),
        Algorithm::Insertion => insertion_sort(&mut recorder),
        Algorithm::Quick => quick_sort(&mut recorder),
        Algorithm::Merge => merge_sort(&mut recorder),
        Algorithm::Heap => heap_sort(&mut recorder),
    }

    let trace = recorder.finish(algorithm);
    log::debug!(
        "{} over {} values: {} events, {} comparisons, {} swaps",
        algorithm,
        snapshot.len(),
        trace.len(),
        trace.comparisons(),
        trace.swaps()
    );
    trace
}

/// Like [`generate`], selecting the algorithm by name.
pub fn generate_named(snapshot: &[Value], name: &str) -> Result<Trace, TraceError> {
    let algorithm = name.parse::<Algorithm>().inspect_err(|e| log::warn!("{}", e))?;
    Ok(generate(snapshot, algorithm))
}

/// Apply `events` in order to a copy of `snapshot` and return the result.
pub fn replay(snapshot: &[Value], events: &[Event]) -> Result<Vec<Value>, TraceError> {
    let mut values = snapshot.to_vec();
    for event in events {
        event.apply_to(&mut values)?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    fn sorted_indices(trace: &Trace) -> BTreeSet<usize> {
        trace
            .iter()
            .filter_map(|e| match *e {
                Event::Sorted { index } => Some(index),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_generate_leaves_snapshot_untouched() {
        let snapshot = vec![9, 4, 7, 1, 3];
        for algorithm in Algorithm::ALL {
            let _ = generate(&snapshot, algorithm);
            assert_eq!(snapshot, vec![9, 4, 7, 1, 3]);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let snapshot = vec![12, 90, 33, 33, 5, 61, 48];
        for algorithm in Algorithm::ALL {
            assert_eq!(generate(&snapshot, algorithm), generate(&snapshot, algorithm));
        }
    }

    #[test]
    fn test_generate_named() {
        let trace = generate_named(&[2, 1], "insertion").unwrap();
        assert_eq!(trace.algorithm(), Algorithm::Insertion);

        let err = generate_named(&[2, 1], "shellSort").unwrap_err();
        assert_eq!(err, TraceError::InvalidAlgorithm("shellSort".into()));
    }

    #[test]
    fn test_single_element_fully_sorted() {
        for algorithm in Algorithm::ALL {
            let trace = generate(&[42], algorithm);
            assert_eq!(trace.comparisons(), 0, "{}", algorithm);
            assert_eq!(trace.swaps(), 0, "{}", algorithm);
            assert_eq!(sorted_indices(&trace), BTreeSet::from([0]), "{}", algorithm);
        }
    }

    #[test]
    fn test_already_sorted_input_marks_every_index() {
        let snapshot: Vec<Value> = (5..25).collect();
        for algorithm in Algorithm::ALL {
            let trace = generate(&snapshot, algorithm);
            assert_eq!(
                sorted_indices(&trace),
                (0..snapshot.len()).collect::<BTreeSet<_>>(),
                "{}",
                algorithm
            );
            assert_eq!(replay(&snapshot, trace.events()).unwrap(), snapshot);
        }
    }

    #[test]
    fn test_replay_rejects_foreign_trace() {
        let trace = generate(&[3, 2, 1], Algorithm::Bubble);
        let err = replay(&[1, 2], trace.events()).unwrap_err();
        assert!(matches!(err, TraceError::IndexOutOfBounds { len: 2, .. }));
    }

    proptest! {
        #[test]
        fn prop_replay_sorts_input(values in prop::collection::vec(0u32..200, 0..64)) {
            let mut expected = values.clone();
            expected.sort_unstable();

            for algorithm in Algorithm::ALL {
                let trace = generate(&values, algorithm);
                prop_assert_eq!(&replay(&values, trace.events()).unwrap(), &expected);
            }
        }

        #[test]
        fn prop_counters_match_events(values in prop::collection::vec(0u32..200, 0..64)) {
            for algorithm in Algorithm::ALL {
                let trace = generate(&values, algorithm);
                let compares = trace.iter().filter(|e| matches!(e, Event::Compare { .. })).count();
                let swaps = trace.iter().filter(|e| matches!(e, Event::Swap { .. })).count();
                prop_assert_eq!(compares, trace.comparisons());
                prop_assert_eq!(swaps, trace.swaps());
            }
        }

        #[test]
        fn prop_sorted_marks_cover_all_indices(values in prop::collection::vec(0u32..200, 0..64)) {
            let all: BTreeSet<usize> = (0..values.len()).collect();
            for algorithm in Algorithm::ALL {
                prop_assert_eq!(&sorted_indices(&generate(&values, algorithm)), &all);
            }
        }
    }
}
