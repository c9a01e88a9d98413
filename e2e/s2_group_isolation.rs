//! E2E S2 — identical input ids in distinct groups never collide as
//! duplicates and remain independently retrievable.

use idmapper::{AsciiPackEncoder, Group, IdMapper, NoopProgress, VecCollector};

#[test]
fn same_input_in_two_groups_is_not_a_duplicate() {
    let mut mapper = IdMapper::new(AsciiPackEncoder);
    let g0 = Group::new(0, "g0");
    let g1 = Group::new(1, "g1");

    mapper.put(&"x".to_string(), 0, &g0).unwrap();
    mapper.put(&"x".to_string(), 1, &g1).unwrap();

    let collector: VecCollector<String> = VecCollector::new();
    let lookup = |id: u64| if id <= 1 { "x".to_string() } else { String::new() };
    mapper.prepare(lookup, &collector, &NoopProgress).unwrap();

    assert!(collector.reports().is_empty(), "no group-crossing duplicate report expected");
    assert_eq!(mapper.get(&"x".to_string(), &g0), 0);
    assert_eq!(mapper.get(&"x".to_string(), &g1), 1);
}

#[test]
fn many_groups_sharing_every_name_stay_isolated() {
    let mut mapper = IdMapper::new(AsciiPackEncoder);
    let groups: Vec<Group> = (0..20).map(|g| Group::new(g, format!("group-{g}"))).collect();
    for (internal_id, g) in groups.iter().enumerate() {
        mapper.put(&"shared".to_string(), internal_id as u64, g).unwrap();
    }

    let collector: VecCollector<String> = VecCollector::new();
    mapper
        .prepare(|_| "shared".to_string(), &collector, &NoopProgress)
        .unwrap();

    assert!(collector.reports().is_empty());
    for (internal_id, g) in groups.iter().enumerate() {
        assert_eq!(mapper.get(&"shared".to_string(), g), internal_id as i64);
    }
}
