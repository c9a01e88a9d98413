//! The id-mapper itself: owns every packed array, drives the two-phase
//! `prepare` algorithm, and answers post-prepare lookups.

use crate::arrays::{GroupArray, LongArray, MemoryVisitor, Tracker};
use crate::bits::{clear_mark, has_mark, set_mark};
use crate::collision_store::CollisionStore;
use crate::config::{GAP, NOT_FOUND, TRACKER32_MAX_INTERNAL_ID};
use crate::encoder::Encoder;
use crate::error::MapperError;
use crate::group::{Group, GroupStore};
use crate::progress::{Collector, Progress};
use crate::radix::{radix_code, SortBucketTable, NUM_RADIX_CODES};
use crate::sort;
use crate::worker_pool::WorkerPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapperState {
    Open,
    Prepared,
    Closed,
    Poisoned,
}

struct MarkAction {
    first_pos: usize,
    other_pos: usize,
}

/// Assigns dense internal ids to arbitrary input identifiers and answers
/// `(input_id, group) -> internal_id` lookups after a one-shot `prepare`.
///
/// `InputId` must expose its byte representation (`AsRef<[u8]>`) for the
/// encoder and support equality for duplicate/collision disambiguation.
pub struct IdMapper<E: Encoder, InputId> {
    encoder: E,
    data: LongArray,
    groups_cache: GroupArray,
    group_store: GroupStore,
    highest_internal_id: Option<u64>,
    tracker: Option<Tracker>,
    sort_buckets: Option<SortBucketTable>,
    collision_store: Option<CollisionStore<InputId>>,
    worker_pool: WorkerPool,
    state: MapperState,
}

impl<E: Encoder, InputId: AsRef<[u8]> + Clone + PartialEq> IdMapper<E, InputId> {
    pub fn new(encoder: E) -> Self {
        Self::with_worker_pool(encoder, WorkerPool::new())
    }

    /// Builds a mapper over an explicit worker pool, mainly so tests can
    /// exercise multi-worker seams deterministically.
    pub fn with_worker_pool(encoder: E, worker_pool: WorkerPool) -> Self {
        IdMapper {
            encoder,
            data: LongArray::new(),
            groups_cache: GroupArray::new(),
            group_store: GroupStore::new(),
            highest_internal_id: None,
            tracker: None,
            sort_buckets: None,
            collision_store: None,
            worker_pool,
            state: MapperState::Open,
        }
    }

    /// Always true: every mapper requires `prepare` before it can answer
    /// lookups.
    pub fn needs_preparation(&self) -> bool {
        true
    }

    pub fn put(&mut self, input_id: &InputId, internal_id: u64, group: &Group) -> Result<(), MapperError> {
        if self.state == MapperState::Closed {
            return Err(MapperError::Closed);
        }
        if self.state != MapperState::Open {
            return Err(MapperError::NotOpen);
        }
        let eid = self.encoder.encode(input_id.as_ref());
        if eid == GAP {
            self.state = MapperState::Poisoned;
            return Err(MapperError::EncoderProducedGap { internal_id });
        }
        self.data.set(internal_id as usize, eid);
        self.groups_cache.set(internal_id as usize, group.id);
        self.group_store.record(group);
        self.highest_internal_id = Some(match self.highest_internal_id {
            Some(h) => h.max(internal_id),
            None => internal_id,
        });
        Ok(())
    }

    /// Sorts the tracker, marks collisions, and (if any were found) builds
    /// the collision side-store and reports duplicates. Call once, after
    /// the last `put`.
    pub fn prepare<F, C, P>(&mut self, input_id_lookup: F, collector: &C, progress: &P) -> Result<(), MapperError>
    where
        F: Fn(u64) -> InputId,
        C: Collector<InputId>,
        P: Progress,
    {
        if self.state != MapperState::Open {
            return Err(MapperError::NotOpen);
        }

        let len = self.highest_internal_id.map(|h| h + 1).unwrap_or(0) as usize;

        progress.started("SPLIT");
        progress.done();

        progress.started("SORT");
        let buckets = if len == 0 {
            self.tracker = Some(Tracker::empty());
            SortBucketTable::from_bounds(vec![0; NUM_RADIX_CODES + 1])
        } else {
            let mut tracker = Tracker::identity(len as u64 - 1);
            let buckets = sort::parallel_sort_tracker(&mut tracker, &self.data, len, &self.worker_pool);
            self.tracker = Some(tracker);
            buckets
        };
        progress.done();

        progress.started("DETECT");
        let collision_count = match self.mark_collisions(len) {
            Ok(n) => n,
            Err(e) => {
                self.state = MapperState::Poisoned;
                return Err(e);
            }
        };
        progress.done();

        if collision_count > 0 {
            progress.started(&format!("RESOLVE ({collision_count} collisions)"));
            let store = CollisionStore::collect(&self.data, len, &input_id_lookup);
            progress.done();

            progress.started("DEDUPLICATE");
            store.detect_duplicates(&self.data, &self.groups_cache, &self.group_store, collector, &self.worker_pool);
            progress.done();

            self.collision_store = Some(store);
        }

        self.sort_buckets = Some(buckets);
        self.state = MapperState::Prepared;
        Ok(())
    }

    /// Phase B: walk every equal-eId run in tracker order and mark same-group
    /// members as colliding. Computation is parallel and read-only over
    /// disjoint pair ranges; the marks (and the defensive ascending-id swap)
    /// are applied in one sequential pass after the worker pool joins, since
    /// both mutate shared state by internal id rather than by the worker's
    /// own disjoint tracker range.
    ///
    /// A plain adjacent-pair scan is not enough: a run can contain more than
    /// one group interleaved (e.g. groups `[g0, g1, g0]` for three equal
    /// eIds), and then the group-match graph over consecutive pairs is
    /// disconnected — neither boundary pair matches, so the genuine g0
    /// duplicate at the ends of the run would never get marked. Instead each
    /// worker's range keeps a small per-run state: the tracker position of
    /// the *first* member seen for each group within the current run. Every
    /// later same-eId element is compared against that remembered first
    /// member (not its immediate predecessor); a match marks both. The
    /// remembered state resets whenever the eId changes, and independently
    /// per worker range (a run that straddles a worker boundary is only
    /// bridged for the one seam pair crossing it, matching the worker pool's
    /// range-local contract).
    fn mark_collisions(&mut self, len: usize) -> Result<u64, MapperError> {
        let pairs = len.saturating_sub(1);
        if pairs == 0 {
            return Ok(0);
        }

        let tracker = self.tracker.as_ref().expect("tracker allocated in phase A");
        let data = &self.data;
        let groups = &self.groups_cache;
        let batches: Vec<Vec<MarkAction>> =
            self.worker_pool
                .run_ranges(pairs, move |range, _is_last| -> Result<Vec<MarkAction>, MapperError> {
                    let mut actions = Vec::new();
                    // (group, tracker position) of the first member seen so
                    // far for each distinct group within the in-progress run.
                    let mut run_eid: Option<u64> = None;
                    let mut run_first: Vec<(u16, usize)> = Vec::new();
                    for i in range {
                        let a = tracker.get(i);
                        let b = tracker.get(i + 1);
                        let ea = clear_mark(data.get(a as usize));
                        let eb = clear_mark(data.get(b as usize));
                        if ea == GAP || eb == GAP {
                            run_eid = None;
                            run_first.clear();
                            continue;
                        }
                        if ea < eb {
                            run_eid = None;
                            run_first.clear();
                            continue;
                        } else if ea > eb {
                            return Err(MapperError::UnsortedTracker {
                                at: i,
                                left_eid: ea,
                                right_eid: eb,
                            });
                        }

                        if run_eid != Some(ea) {
                            run_eid = Some(ea);
                            run_first.clear();
                            run_first.push((groups.get(a as usize), i));
                        }

                        let bg = groups.get(b as usize);
                        match run_first.iter().find(|&&(g, _)| g == bg) {
                            Some(&(_, first_pos)) => actions.push(MarkAction {
                                first_pos,
                                other_pos: i + 1,
                            }),
                            None => run_first.push((bg, i + 1)),
                        }
                    }
                    Ok(actions)
                })?;

        let mut collision_count: u64 = 0;
        for action in batches.into_iter().flatten() {
            let MarkAction { first_pos, other_pos } = action;
            let a = self.tracker.as_ref().expect("tracker allocated in phase A").get(first_pos);
            let b = self.tracker.as_ref().expect("tracker allocated in phase A").get(other_pos);
            if !has_mark(self.data.get(a as usize)) {
                let eid = self.data.get(a as usize);
                self.data.set(a as usize, set_mark(eid));
                collision_count += 1;
            }
            if !has_mark(self.data.get(b as usize)) {
                let eid = self.data.get(b as usize);
                self.data.set(b as usize, set_mark(eid));
                collision_count += 1;
            }
            // Defensive only: the sort's (eid, internal_id) key already
            // yields ascending internal ids within an equal-eid run, so this
            // never actually fires.
            let tracker = self.tracker.as_mut().expect("tracker allocated in phase A");
            if tracker.get(first_pos) > tracker.get(other_pos) {
                tracker.swap(first_pos, other_pos);
            }
        }

        if collision_count > i32::MAX as u64 {
            return Err(MapperError::TooManyCollisions {
                count: collision_count as usize,
            });
        }

        Ok(collision_count)
    }

    /// Returns the internal id for `(input_id, group)`, or `NOT_FOUND`.
    pub fn get(&self, input_id: &InputId, group: &Group) -> i64 {
        if self.state != MapperState::Prepared {
            return NOT_FOUND;
        }
        let (tracker, buckets) = match (&self.tracker, &self.sort_buckets) {
            (Some(t), Some(b)) => (t, b),
            _ => return NOT_FOUND,
        };
        let total_len = buckets.total_len();
        if total_len == 0 {
            return NOT_FOUND;
        }

        let x = clear_mark(self.encoder.encode(input_id.as_ref()));
        let rx = radix_code(x);
        let (low, high) = buckets.zoom(rx);

        if let Some(found) = self.search_range(input_id, group, x, tracker, low, high) {
            return found as i64;
        }
        // Fallback: a full-range search guards against boundary straddles
        // between radix bucketing and an equal-eid run.
        self.search_range(input_id, group, x, tracker, 0, total_len)
            .map(|v| v as i64)
            .unwrap_or(NOT_FOUND)
    }

    fn search_range(
        &self,
        input_id: &InputId,
        group: &Group,
        x: u64,
        tracker: &Tracker,
        low: usize,
        high: usize,
    ) -> Option<u64> {
        if low >= high {
            return None;
        }
        let mut lo = low;
        let mut hi = high;
        let mut mid_match = None;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let internal_id = tracker.get(mid);
            let eid = clear_mark(self.data.get(internal_id as usize));
            match eid.cmp(&x) {
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
                std::cmp::Ordering::Equal => {
                    mid_match = Some(mid);
                    break;
                }
            }
        }
        let mid = mid_match?;

        let mut range_lo = mid;
        while range_lo > low {
            let prev = tracker.get(range_lo - 1);
            if clear_mark(self.data.get(prev as usize)) == x {
                range_lo -= 1;
            } else {
                break;
            }
        }
        let mut range_hi = mid + 1;
        while range_hi < high {
            let next = tracker.get(range_hi);
            if clear_mark(self.data.get(next as usize)) == x {
                range_hi += 1;
            } else {
                break;
            }
        }

        let mut best: Option<u64> = None;
        for pos in range_lo..range_hi {
            let internal_id = tracker.get(pos);
            if self.groups_cache.get(internal_id as usize) != group.id {
                continue;
            }
            let eid = self.data.get(internal_id as usize);
            if !has_mark(eid) {
                return Some(internal_id);
            }
            if let Some(store) = &self.collision_store {
                if let Some(stored_input) = store.input_id_for(internal_id) {
                    if stored_input == input_id {
                        best = Some(match best {
                            Some(b) => b.min(internal_id),
                            None => internal_id,
                        });
                    }
                }
            }
        }
        best
    }

    /// `num_nodes * (8 + tracker_width_bytes)`, where the tracker width is
    /// whatever `num_nodes - 1` as a highest internal id would require.
    pub fn calculate_memory_usage(&self, num_nodes: u64) -> u64 {
        let width = if num_nodes == 0 {
            4
        } else if num_nodes - 1 <= TRACKER32_MAX_INTERNAL_ID {
            4
        } else {
            5
        };
        num_nodes * (8 + width)
    }

    pub fn accept_memory_stats(&self, visitor: &mut dyn MemoryVisitor) {
        self.data.accept(visitor);
        self.groups_cache.accept(visitor);
        if let Some(t) = &self.tracker {
            t.accept(visitor);
        }
        if let Some(s) = &self.collision_store {
            s.accept(visitor);
        }
    }

    /// Releases every packed array. Legal from any state.
    pub fn close(&mut self) {
        self.data = LongArray::new();
        self.groups_cache = GroupArray::new();
        self.tracker = None;
        self.sort_buckets = None;
        self.collision_store = None;
        self.state = MapperState::Closed;
    }
}
