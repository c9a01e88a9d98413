//! Collision side-store: the original input identifiers for every
//! collision-marked internal id, plus the linear duplicate scan that
//! populates the collector.
//!
//! `internal_ids` is built by scanning the data cache once in ascending
//! internal-id order, so it comes out already sorted — `input_id_for`'s
//! binary search relies on that rather than re-sorting after the fact.
//! Duplicate detection needs a *different* order (grouped by equal eId,
//! then by internal id) to find adjacent runs, so it builds its own
//! transient local permutation via the ordinary tracker sorter and
//! discards it once the scan finishes; the retained `internal_ids` /
//! `input_ids` arrays are never reordered.

use crate::arrays::{GroupArray, LongArray, MemoryVisitor, Tracker};
use crate::bits::clear_mark;
use crate::group::GroupStore;
use crate::progress::Collector;
use crate::worker_pool::WorkerPool;

pub struct CollisionStore<InputId> {
    internal_ids: Vec<u64>,
    input_ids: Vec<InputId>,
}

impl<InputId: Clone + PartialEq> CollisionStore<InputId> {
    /// Scans `data[0..len)` for collision-marked entries and records each
    /// one's original input id via `input_id_lookup`.
    pub fn collect(data: &LongArray, len: usize, input_id_lookup: impl Fn(u64) -> InputId) -> Self {
        let mut internal_ids = Vec::new();
        for internal_id in 0..len as u64 {
            if crate::bits::has_mark(data.get(internal_id as usize)) {
                internal_ids.push(internal_id);
            }
        }
        let input_ids = internal_ids.iter().map(|&id| input_id_lookup(id)).collect();
        CollisionStore {
            internal_ids,
            input_ids,
        }
    }

    pub fn len(&self) -> usize {
        self.internal_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.internal_ids.is_empty()
    }

    /// The original input id recorded for `internal_id`, if it is one of
    /// the marked entries this store holds.
    pub fn input_id_for(&self, internal_id: u64) -> Option<&InputId> {
        self.internal_ids
            .binary_search(&internal_id)
            .ok()
            .map(|i| &self.input_ids[i])
    }

    /// Sorts a transient local permutation by `(eid, internal_id)`, scans
    /// it for adjacent runs of equal `(eid, group)`, and reports every
    /// repeated input identifier within a run to `collector`.
    pub fn detect_duplicates<C: Collector<InputId>>(
        &self,
        data: &LongArray,
        groups: &GroupArray,
        group_store: &GroupStore,
        collector: &C,
        pool: &WorkerPool,
    ) {
        let n = self.internal_ids.len();
        if n == 0 {
            return;
        }

        let mut collision_eids = LongArray::with_capacity(n);
        for (local, &internal_id) in self.internal_ids.iter().enumerate() {
            collision_eids.set(local, data.get(internal_id as usize));
        }
        let mut local_tracker = Tracker::identity((n - 1) as u64);
        crate::sort::parallel_sort_tracker(&mut local_tracker, &collision_eids, n, pool);

        let mut i = 0;
        while i < n {
            let local = local_tracker.get(i) as usize;
            let eid = clear_mark(collision_eids.get(local));
            let mut j = i + 1;
            while j < n {
                let local_j = local_tracker.get(j) as usize;
                if clear_mark(collision_eids.get(local_j)) != eid {
                    break;
                }
                j += 1;
            }
            self.dedup_run(&local_tracker, groups, group_store, collector, i, j);
            i = j;
        }
    }

    fn dedup_run<C: Collector<InputId>>(
        &self,
        local_tracker: &Tracker,
        groups: &GroupArray,
        group_store: &GroupStore,
        collector: &C,
        start: usize,
        end: usize,
    ) {
        let mut seen: Vec<(u16, usize)> = Vec::new();
        for pos in start..end {
            let local = local_tracker.get(pos) as usize;
            let internal_id = self.internal_ids[local];
            let group_id = groups.get(internal_id as usize);
            let input_id = &self.input_ids[local];
            let already_seen = seen
                .iter()
                .any(|&(g, l)| g == group_id && &self.input_ids[l] == input_id);
            if already_seen {
                let name = group_store.name(group_id).unwrap_or("");
                collector.duplicate(input_id, internal_id, name);
            } else {
                seen.push((group_id, local));
            }
        }
    }

    pub fn accept(&self, visitor: &mut dyn MemoryVisitor) {
        let per_entry = std::mem::size_of::<u64>() as u64;
        let live = self.internal_ids.len() as u64 * per_entry * 2;
        visitor.visit("collision_side_store", live, live);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::set_mark;
    use crate::progress::VecCollector;

    fn marked_data(eids: &[u64]) -> LongArray {
        let mut data = LongArray::new();
        for (i, &e) in eids.iter().enumerate() {
            data.set(i, set_mark(e));
        }
        data
    }

    #[test]
    fn collect_finds_every_marked_entry() {
        let data = marked_data(&[10, 20, 30]);
        let store = CollisionStore::collect(&data, 3, |id| format!("input-{id}"));
        assert_eq!(store.len(), 3);
        assert_eq!(store.input_id_for(1), Some(&"input-1".to_string()));
    }

    #[test]
    fn input_id_for_misses_unmarked_entries() {
        let mut data = LongArray::new();
        data.set(0, 42); // not marked
        let store = CollisionStore::collect(&data, 1, |id| format!("input-{id}"));
        assert!(store.is_empty());
        assert_eq!(store.input_id_for(0), None);
    }

    #[test]
    fn detect_duplicates_reports_repeated_input_in_same_group() {
        // Two internal ids share eId 77 and group 0, with the same input id.
        let data = marked_data(&[77, 77]);
        let mut groups = GroupArray::new();
        groups.set(0, 0);
        groups.set(1, 0);
        let group_store = GroupStore::new();
        let store = CollisionStore::collect(&data, 2, |_id| "dup".to_string());
        let collector: VecCollector<String> = VecCollector::new();
        let pool = WorkerPool::with_workers(2);
        store.detect_duplicates(&data, &groups, &group_store, &collector, &pool);
        let reports = collector.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].1, 1, "the later internal id is reported");
    }

    #[test]
    fn detect_duplicates_ignores_cross_group_matches() {
        let data = marked_data(&[77, 77]);
        let mut groups = GroupArray::new();
        groups.set(0, 0);
        groups.set(1, 1);
        let group_store = GroupStore::new();
        let store = CollisionStore::collect(&data, 2, |_id| "same".to_string());
        let collector: VecCollector<String> = VecCollector::new();
        let pool = WorkerPool::with_workers(2);
        store.detect_duplicates(&data, &groups, &group_store, &collector, &pool);
        assert!(collector.reports().is_empty());
    }
}
