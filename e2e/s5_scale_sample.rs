//! E2E S5 — large-population round trip: a big batch of distinct input ids
//! assigned to consecutive internal ids, then a random sample of lookups each
//! confirmed against its original internal id.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use idmapper::{Group, IdMapper, NoopCollector, NoopProgress, Xxh64Encoder};

const POPULATION: u64 = 200_000;
const SAMPLE: usize = 5_000;

#[test]
fn random_sample_of_a_large_population_round_trips() {
    let mut mapper = IdMapper::new(Xxh64Encoder::new(1));
    let g0 = Group::new(0, "nodes");

    for i in 0..POPULATION {
        mapper.put(&format!("node-{i}"), i, &g0).unwrap();
    }

    mapper
        .prepare(|_| String::new(), &NoopCollector, &NoopProgress)
        .unwrap();

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..SAMPLE {
        let i = rng.gen_range(0..POPULATION);
        let key = format!("node-{i}");
        assert_eq!(mapper.get(&key, &g0), i as i64);
    }
}
