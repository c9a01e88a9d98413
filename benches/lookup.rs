//! Criterion benchmarks for `IdMapper::get` after `prepare`, at varying
//! population sizes.
//!
//! Run with:
//!   cargo bench --bench lookup

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use idmapper::{Group, IdMapper, NoopCollector, NoopProgress, Xxh64Encoder};

fn populated_mapper(n: u64) -> IdMapper<Xxh64Encoder, String> {
    let mut mapper = IdMapper::new(Xxh64Encoder::new(42));
    let g0 = Group::new(0, "bench");
    for i in 0..n {
        mapper.put(&format!("node-{i}"), i, &g0).unwrap();
    }
    mapper
        .prepare(|_| String::new(), &NoopCollector, &NoopProgress)
        .unwrap();
    mapper
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper_get");
    let g0 = Group::new(0, "bench");

    for &n in &[10_000u64, 100_000, 1_000_000] {
        let mapper = populated_mapper(n);

        group.bench_with_input(BenchmarkId::new("hit", n), &n, |b, &n| {
            let mut i = 0u64;
            b.iter(|| {
                let key = format!("node-{}", i % n);
                i += 1;
                mapper.get(&key, &g0)
            })
        });

        group.bench_with_input(BenchmarkId::new("miss", n), &n, |b, _n| {
            b.iter(|| mapper.get(&"does-not-exist".to_string(), &g0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
