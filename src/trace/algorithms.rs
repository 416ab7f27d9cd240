//! Sorting algorithms instrumented through [`TraceRecorder`].
//!
//! Each function sorts the recorder's working copy in place. The order of
//! recorded events is the order a textbook implementation performs them.

use std::cmp::Ordering;

use super::TraceRecorder;

/// Adjacent compare-and-swap passes; each pass finalizes the last unsorted index.
pub fn bubble_sort(rec: &mut TraceRecorder) {
    let n = rec.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if rec.compare(j, j + 1) == Ordering::Greater {
                rec.swap(j, j + 1);
            }
        }
        rec.mark_sorted(n - i - 1);
    }
}

/// One minimum search and at most one swap per position.
pub fn selection_sort(rec: &mut TraceRecorder) {
    let n = rec.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if rec.compare(j, min) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            rec.swap(i, min);
        }
        rec.mark_sorted(i);
    }
}

/// Shift each element left by adjacent swaps until it is in place.
pub fn insertion_sort(rec: &mut TraceRecorder) {
    let n = rec.len();
    if n == 0 {
        return;
    }
    // A one-element prefix is already sorted.
    rec.mark_sorted(0);

    for i in 1..n {
        let mut j = i;
        while j > 0 && rec.compare(j, j - 1) == Ordering::Less {
            rec.swap(j, j - 1);
            j -= 1;
        }
        rec.mark_sorted(i);
    }
}

/// Quick sort with a Lomuto partition around the last element.
pub fn quick_sort(rec: &mut TraceRecorder) {
    let n = rec.len();
    quick_sort_range(rec, 0, n);
}

/// Sort the half-open range `[lo, hi)`.
fn quick_sort_range(rec: &mut TraceRecorder, lo: usize, hi: usize) {
    match hi.saturating_sub(lo) {
        0 => return,
        1 => {
            rec.mark_sorted(lo);
            return;
        }
        _ => {}
    }

    let pivot = partition(rec, lo, hi);
    rec.mark_sorted(pivot);

    quick_sort_range(rec, lo, pivot);
    quick_sort_range(rec, pivot + 1, hi);
}

/// Partition `[lo, hi)` around `hi - 1`, returning the pivot's final index.
fn partition(rec: &mut TraceRecorder, lo: usize, hi: usize) -> usize {
    let pivot = hi - 1;
    // Next slot for an element <= pivot.
    let mut store = lo;

    for j in lo..pivot {
        if rec.compare(j, pivot) != Ordering::Greater {
            if store != j {
                rec.swap(store, j);
            }
            store += 1;
        }
    }

    rec.swap(store, pivot);
    store
}

/// Top-down merge sort through temporary buffers.
pub fn merge_sort(rec: &mut TraceRecorder) {
    match rec.len() {
        0 => {}
        // No merge ever runs, so nothing else would finalize the lone element.
        1 => rec.mark_sorted(0),
        n => merge_sort_range(rec, 0, n),
    }
}

/// Sort the half-open range `[lo, hi)`.
fn merge_sort_range(rec: &mut TraceRecorder, lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }

    // Left half takes the extra element for odd lengths.
    let mid = (lo + hi - 1) / 2 + 1;
    merge_sort_range(rec, lo, mid);
    merge_sort_range(rec, mid, hi);
    merge(rec, lo, mid, hi);
}

fn merge(rec: &mut TraceRecorder, lo: usize, mid: usize, hi: usize) {
    let left = rec.values()[lo..mid].to_vec();
    let right = rec.values()[mid..hi].to_vec();

    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        let order = rec.compare_external(lo + i, mid + j, left[i], right[j]);
        // Ties take the left head to keep the sort stable.
        if order != Ordering::Greater {
            rec.overwrite(k, left[i]);
            i += 1;
        } else {
            rec.overwrite(k, right[j]);
            j += 1;
        }
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        rec.overwrite(k, value);
        k += 1;
    }

    for index in lo..hi {
        rec.mark_sorted(index);
    }
}

/// Heap sort: build a max-heap, then repeatedly move the root to the end.
pub fn heap_sort(rec: &mut TraceRecorder) {
    let n = rec.len();
    if n == 0 {
        return;
    }

    for i in (0..n / 2).rev() {
        sift_down(rec, n, i);
    }

    for end in (1..n).rev() {
        rec.swap(0, end);
        rec.mark_sorted(end);
        sift_down(rec, end, 0);
    }

    rec.mark_sorted(0);
}

/// Restore the max-heap property for the subtree at `root` within `[0, n)`.
fn sift_down(rec: &mut TraceRecorder, n: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < n && rec.compare(left, largest) == Ordering::Greater {
            largest = left;
        }
        if right < n && rec.compare(right, largest) == Ordering::Greater {
            largest = right;
        }

        if largest == root {
            return;
        }
        rec.swap(root, largest);
        root = largest;
    }
}
