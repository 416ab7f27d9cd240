//! Sorting algorithm identifiers and their descriptive metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::trace::TraceError;

/// Sorting algorithms that can be traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Adjacent compare-and-swap passes.
    #[default]
    #[serde(rename = "bubbleSort", alias = "bubble")]
    Bubble,
    /// Select the minimum of the unsorted suffix each pass.
    #[serde(rename = "selectionSort", alias = "selection")]
    Selection,
    /// Shift each element left into the sorted prefix.
    #[serde(rename = "insertionSort", alias = "insertion")]
    Insertion,
    /// Lomuto partition around the last element.
    #[serde(rename = "quickSort", alias = "quick")]
    Quick,
    /// Top-down merge through temporary buffers.
    #[serde(rename = "mergeSort", alias = "merge")]
    Merge,
    /// Max-heap build followed by repeated root extraction.
    #[serde(rename = "heapSort", alias = "heap")]
    Heap,
}

impl Algorithm {
    /// All algorithms, in the order a selector would list them.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
    ];

    /// Canonical identifier (matches the serialized form).
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubbleSort",
            Algorithm::Selection => "selectionSort",
            Algorithm::Insertion => "insertionSort",
            Algorithm::Quick => "quickSort",
            Algorithm::Merge => "mergeSort",
            Algorithm::Heap => "heapSort",
        }
    }

    /// Short identifier without the `Sort` suffix.
    pub fn short_id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
        }
    }

    /// Human-readable description and complexity figures.
    pub fn info(self) -> AlgorithmInfo {
        match self {
            Algorithm::Bubble => AlgorithmInfo {
                title: "Bubble Sort",
                description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            Algorithm::Selection => AlgorithmInfo {
                title: "Selection Sort",
                description: "Divides input into sorted and unsorted regions, repeatedly selects smallest element from unsorted region.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            Algorithm::Insertion => AlgorithmInfo {
                title: "Insertion Sort",
                description: "Builds sorted array one item at a time, taking each element and inserting it into its correct position.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            Algorithm::Quick => AlgorithmInfo {
                title: "Quick Sort",
                description: "Divides array into smaller subarrays using a pivot, recursively sorts subarrays.",
                time_complexity: "O(n log n) average, O(n²) worst",
                space_complexity: "O(log n)",
            },
            Algorithm::Merge => AlgorithmInfo {
                title: "Merge Sort",
                description: "Divides array into halves, sorts them recursively, then merges sorted halves.",
                time_complexity: "O(n log n)",
                space_complexity: "O(n)",
            },
            Algorithm::Heap => AlgorithmInfo {
                title: "Heap Sort",
                description: "Converts array into a heap data structure, repeatedly extracts maximum element.",
                time_complexity: "O(n log n)",
                space_complexity: "O(1)",
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    /// Accepts both `bubbleSort` and `bubble` forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| name.eq_ignore_ascii_case(a.id()) || name.eq_ignore_ascii_case(a.short_id()))
            .ok_or_else(|| TraceError::InvalidAlgorithm(name.to_string()))
    }
}

/// Static description of an algorithm for display alongside the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}
