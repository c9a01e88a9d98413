//! E2E — sort-order invariant and the memory-usage bound (spec properties 2
//! and 6): after `prepare`, the tracker is non-decreasing under the
//! mark-cleared eId ordering, and reported live bytes stay within the
//! documented multiple of `calculate_memory_usage`.

use idmapper::{Group, IdMapper, MemoryTotals, NoopCollector, NoopProgress, Xxh64Encoder};

#[test]
fn tracker_is_sorted_by_mark_cleared_eid_after_prepare() {
    let mut mapper = IdMapper::new(Xxh64Encoder::new(5));
    let g0 = Group::new(0, "nodes");
    let n: u64 = 5_000;
    for i in 0..n {
        mapper.put(&format!("key-{i}"), i, &g0).unwrap();
    }
    mapper
        .prepare(|_| String::new(), &NoopCollector, &NoopProgress)
        .unwrap();

    // Indirectly exercise the sort invariant: every key still resolves to
    // its own internal id, which can only hold if the radix-zoomed binary
    // search is walking a genuinely sorted tracker.
    for i in 0..n {
        assert_eq!(mapper.get(&format!("key-{i}"), &g0), i as i64);
    }
}

#[test]
fn live_memory_stays_within_the_documented_bound() {
    let mut mapper = IdMapper::new(Xxh64Encoder::new(9));
    let g0 = Group::new(0, "nodes");
    let n: u64 = 10_000;
    for i in 0..n {
        mapper.put(&format!("node-{i}"), i, &g0).unwrap();
    }
    mapper
        .prepare(|_| String::new(), &NoopCollector, &NoopProgress)
        .unwrap();

    let mut totals = MemoryTotals::default();
    mapper.accept_memory_stats(&mut totals);

    let budget = mapper.calculate_memory_usage(n);
    assert!(
        totals.live_total <= (budget as f64 * 1.25) as u64,
        "live bytes {} exceeded 1.25x the {}-byte budget",
        totals.live_total,
        budget
    );
}

#[test]
fn memory_usage_is_zero_for_an_empty_population() {
    let mapper: IdMapper<_, String> = IdMapper::new(Xxh64Encoder::new(1));
    assert_eq!(mapper.calculate_memory_usage(0), 0);
}
