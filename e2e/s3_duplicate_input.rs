//! E2E S3 — a real duplicate `(input_id, group)` is reported exactly once,
//! and `get` keeps resolving to the first-seen (lowest) internal id.

use idmapper::{AsciiPackEncoder, Group, IdMapper, NoopProgress, VecCollector};

#[test]
fn duplicate_is_reported_once_and_lowest_internal_id_wins() {
    let mut mapper = IdMapper::new(AsciiPackEncoder);
    let g0 = Group::new(0, "g0");

    mapper.put(&"dup".to_string(), 0, &g0).unwrap();
    mapper.put(&"dup".to_string(), 1, &g0).unwrap();

    let collector: VecCollector<String> = VecCollector::new();
    let lookup = |id: u64| if id <= 1 { "dup".to_string() } else { String::new() };
    mapper.prepare(lookup, &collector, &NoopProgress).unwrap();

    let reports = collector.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0], ("dup".to_string(), 1, "g0".to_string()));
    assert_eq!(mapper.get(&"dup".to_string(), &g0), 0);
}

#[test]
fn three_way_duplicate_reports_every_additional_occurrence() {
    let mut mapper = IdMapper::new(AsciiPackEncoder);
    let g0 = Group::new(0, "g0");

    mapper.put(&"triple".to_string(), 5, &g0).unwrap();
    mapper.put(&"triple".to_string(), 6, &g0).unwrap();
    mapper.put(&"triple".to_string(), 7, &g0).unwrap();

    let collector: VecCollector<String> = VecCollector::new();
    let lookup = |id: u64| if (5..=7).contains(&id) { "triple".to_string() } else { String::new() };
    mapper.prepare(lookup, &collector, &NoopProgress).unwrap();

    let mut reported_ids: Vec<u64> = collector.reports().iter().map(|(_, id, _)| *id).collect();
    reported_ids.sort_unstable();
    assert_eq!(reported_ids, vec![6, 7], "one report per occurrence after the first");
    assert_eq!(mapper.get(&"triple".to_string(), &g0), 5);
}
