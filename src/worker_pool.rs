//! Fixed-size worker pool for the mapper's bulk phases.
//!
//! `N = max(1, cores - 1)` OS-level worker threads, backed by a
//! `rayon::ThreadPool` sized to exactly `N` (rather than rayon's process-wide
//! default pool, which would use every core). Workers operate on disjoint
//! index ranges; the pool joins all of them and propagates the first error
//! encountered, in range order.

use std::ops::Range;

use rayon::prelude::*;

use crate::config::MIN_PARALLEL_STRIDE;
use crate::util::count_cores;

/// A pool of `N = max(1, cores - 1)` worker threads used by the sort and
/// collision-detection phases of `prepare`.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    n: usize,
}

impl WorkerPool {
    /// Builds a pool sized to the host's core count minus one.
    pub fn new() -> Self {
        let n = (count_cores().saturating_sub(1)).max(1);
        Self::with_workers(n)
    }

    /// Builds a pool with an explicit worker count — mainly for tests that
    /// want to exercise multi-worker seams deterministically.
    pub fn with_workers(n: usize) -> Self {
        let n = n.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .expect("failed to build worker pool");
        WorkerPool { pool, n }
    }

    pub fn num_workers(&self) -> usize {
        self.n
    }

    /// How many workers to actually use for a job of `total_len` items: a
    /// stride of fewer than `MIN_PARALLEL_STRIDE` entries per worker
    /// collapses to single-threaded execution.
    fn effective_workers(&self, total_len: usize) -> usize {
        if total_len < self.n * MIN_PARALLEL_STRIDE {
            1
        } else {
            self.n
        }
    }

    /// Splits `[0, total_len)` into `effective_workers(total_len)` disjoint,
    /// (nearly) equal half-open ranges.
    fn split_ranges(&self, total_len: usize) -> Vec<Range<usize>> {
        let workers = self.effective_workers(total_len);
        let base = total_len / workers;
        let rem = total_len % workers;
        let mut ranges = Vec::with_capacity(workers);
        let mut start = 0;
        for i in 0..workers {
            let len = base + if i < rem { 1 } else { 0 };
            ranges.push(start..start + len);
            start += len;
        }
        ranges
    }

    /// Runs `f(range, is_last)` once per disjoint range covering
    /// `[0, total_len)`, in parallel, and returns the per-range results in
    /// range order. `is_last` is true only for the last range (every range
    /// but the last also owns the seam to its right neighbor). On any error,
    /// the first error encountered (by range order) is returned and the rest
    /// are discarded.
    pub fn run_ranges<T, E, F>(&self, total_len: usize, f: F) -> Result<Vec<T>, E>
    where
        F: Fn(Range<usize>, bool) -> Result<T, E> + Sync,
        T: Send,
        E: Send,
    {
        let ranges = self.split_ranges(total_len);
        let last = ranges.len().saturating_sub(1);
        let results: Vec<Result<T, E>> = self.pool.install(|| {
            ranges
                .into_par_iter()
                .enumerate()
                .map(|(i, r)| f(r, i == last))
                .collect()
        });
        let mut out = Vec::with_capacity(results.len());
        for r in results {
            out.push(r?);
        }
        Ok(out)
    }

    /// Runs `f` over disjoint, already-pre-partitioned mutable slices of a
    /// single buffer in parallel — used by the sorter, whose radix-bucket
    /// ranges are not equal-sized. Ranges of length 0 are skipped; `f` is
    /// never called with an empty slice.
    pub fn for_each_slice<'a, T, F>(&self, slices: Vec<&'a mut [T]>, f: F)
    where
        T: Send,
        F: Fn(&mut [T]) + Sync,
    {
        self.pool.install(|| {
            slices
                .into_par_iter()
                .filter(|s| !s.is_empty())
                .for_each(|s| f(s));
        });
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn split_ranges_covers_total_len_exactly() {
        let pool = WorkerPool::with_workers(4);
        let ranges = pool.split_ranges(1000);
        assert_eq!(ranges.first().unwrap().start, 0);
        assert_eq!(ranges.last().unwrap().end, 1000);
        for w in ranges.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
    }

    #[test]
    fn small_jobs_collapse_to_single_range() {
        let pool = WorkerPool::with_workers(8);
        let ranges = pool.split_ranges(5);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0], 0..5);
    }

    #[test]
    fn run_ranges_last_flag_only_on_final_range() {
        let pool = WorkerPool::with_workers(4);
        let results: Vec<(Range<usize>, bool)> = pool
            .run_ranges(400, |r, is_last| Ok::<_, ()>((r, is_last)))
            .unwrap();
        for (i, (_, is_last)) in results.iter().enumerate() {
            assert_eq!(*is_last, i == results.len() - 1);
        }
    }

    #[test]
    fn run_ranges_propagates_first_error() {
        let pool = WorkerPool::with_workers(4);
        let result: Result<Vec<()>, &'static str> =
            pool.run_ranges(400, |r, _| if r.start == 0 { Err("boom") } else { Ok(()) });
        assert_eq!(result.unwrap_err(), "boom");
    }

    #[test]
    fn run_ranges_covers_every_index_exactly_once() {
        let pool = WorkerPool::with_workers(4);
        let seen = AtomicUsize::new(0);
        let _: Vec<()> = pool
            .run_ranges(1000, |r, _| {
                seen.fetch_add(r.len(), Ordering::Relaxed);
                Ok::<_, ()>(())
            })
            .unwrap();
        assert_eq!(seen.load(Ordering::Relaxed), 1000);
    }

    #[test]
    fn for_each_slice_mutates_every_element() {
        let pool = WorkerPool::with_workers(4);
        let mut buf = vec![0u64; 100];
        let (a, b) = buf.split_at_mut(40);
        pool.for_each_slice(vec![a, b], |s| {
            for v in s.iter_mut() {
                *v = 1;
            }
        });
        assert!(buf.iter().all(|&v| v == 1));
    }
}
