//! E2E S4 — an accidental encoder collision (two distinct inputs that
//! truncate to the same eId) marks both entries but reports no duplicate;
//! both remain independently retrievable.

use idmapper::{AsciiPackEncoder, Group, IdMapper, NoopProgress, VecCollector};

#[test]
fn distinct_twelve_char_strings_sharing_a_prefix_both_resolve_correctly() {
    let mut mapper = IdMapper::new(AsciiPackEncoder);
    let g0 = Group::new(0, "g0");

    // Both strings share the same first 7 bytes ("identic"), so
    // AsciiPackEncoder produces the same eId for each — an accidental
    // collision rather than a logical duplicate.
    let a = "identicalAAA".to_string();
    let b = "identicalBBB".to_string();
    mapper.put(&a, 0, &g0).unwrap();
    mapper.put(&b, 1, &g0).unwrap();

    let collector: VecCollector<String> = VecCollector::new();
    let a2 = a.clone();
    let b2 = b.clone();
    let lookup = move |id: u64| if id == 0 { a2.clone() } else { b2.clone() };
    mapper.prepare(lookup, &collector, &NoopProgress).unwrap();

    assert!(collector.reports().is_empty(), "accidental collisions are not duplicates");
    assert_eq!(mapper.get(&a, &g0), 0);
    assert_eq!(mapper.get(&b, &g0), 1);
}

#[test]
fn three_way_accidental_collision_resolves_every_member() {
    let mut mapper = IdMapper::new(AsciiPackEncoder);
    let g0 = Group::new(0, "g0");

    let inputs = ["collideAAAA".to_string(), "collideBBBB".to_string(), "collideCCCC".to_string()];
    for (i, s) in inputs.iter().enumerate() {
        mapper.put(s, i as u64, &g0).unwrap();
    }

    let collector: VecCollector<String> = VecCollector::new();
    let owned = inputs.clone();
    let lookup = move |id: u64| owned[id as usize].clone();
    mapper.prepare(lookup, &collector, &NoopProgress).unwrap();

    assert!(collector.reports().is_empty());
    for (i, s) in inputs.iter().enumerate() {
        assert_eq!(mapper.get(s, &g0), i as i64);
    }
}
