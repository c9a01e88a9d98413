//! E2E S1 — unique inputs within one group round-trip through put/prepare/get.

use idmapper::{AsciiPackEncoder, Group, IdMapper, NoopCollector, NoopProgress, NOT_FOUND};

#[test]
fn alice_bob_carol_round_trip_and_dave_is_not_found() {
    let mut mapper = IdMapper::new(AsciiPackEncoder);
    let g0 = Group::new(0, "people");

    mapper.put(&"alice".to_string(), 0, &g0).unwrap();
    mapper.put(&"bob".to_string(), 1, &g0).unwrap();
    mapper.put(&"carol".to_string(), 2, &g0).unwrap();

    mapper
        .prepare(|_| String::new(), &NoopCollector, &NoopProgress)
        .unwrap();

    assert_eq!(mapper.get(&"bob".to_string(), &g0), 1);
    assert_eq!(mapper.get(&"dave".to_string(), &g0), NOT_FOUND);
}

#[test]
fn every_distinct_triple_resolves_to_its_own_internal_id() {
    let mut mapper = IdMapper::new(AsciiPackEncoder);
    let g0 = Group::new(0, "people");
    let names: Vec<String> = (0..200).map(|i| format!("n{i:06}")).collect();
    for (i, name) in names.iter().enumerate() {
        mapper.put(name, i as u64, &g0).unwrap();
    }

    mapper
        .prepare(|_| String::new(), &NoopCollector, &NoopProgress)
        .unwrap();

    for (i, name) in names.iter().enumerate() {
        assert_eq!(mapper.get(name, &g0), i as i64);
    }
    assert_eq!(mapper.get(&"not-present".to_string(), &g0), NOT_FOUND);
}
