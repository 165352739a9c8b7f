use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use probemap::{HashStrategy, ProbeMap, ProbeStrategy};
use std::time::Duration;

const TABLE_CAPACITY: usize = 1024;
const LOAD: usize = 700;

const STRATEGIES: [ProbeStrategy; 3] = [
    ProbeStrategy::Linear,
    ProbeStrategy::Quadratic,
    ProbeStrategy::DoubleHash,
];

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn table(probe: ProbeStrategy) -> ProbeMap<u64> {
    ProbeMap::with_strategies(
        TABLE_CAPACITY,
        probe,
        HashStrategy::Polynomial,
        HashStrategy::Sum,
    )
    .unwrap()
}

fn bench_populate(c: &mut Criterion) {
    for probe in STRATEGIES {
        c.bench_function(&format!("probemap_populate_{}", probe.name()), |b| {
            b.iter_batched(
                || table(probe),
                |mut map| {
                    // Quadratic probing may reject keys at this load.
                    for x in lcg(1).take(LOAD) {
                        let _ = map.insert(&x.to_le_bytes(), x);
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_lookup_hit(c: &mut Criterion) {
    for probe in STRATEGIES {
        c.bench_function(&format!("probemap_lookup_hit_{}", probe.name()), |b| {
            let mut map = table(probe);
            let keys: Vec<[u8; 8]> = lcg(7).take(LOAD).map(u64::to_le_bytes).collect();
            let mut inserted = Vec::with_capacity(keys.len());
            for (i, key) in keys.iter().enumerate() {
                if map.insert(key, i as u64).is_ok() {
                    inserted.push(*key);
                }
            }
            let mut it = inserted.iter().cycle();
            b.iter(|| {
                let key = it.next().unwrap();
                black_box(map.get(key));
            })
        });
    }
}

fn bench_lookup_miss(c: &mut Criterion) {
    for probe in STRATEGIES {
        c.bench_function(&format!("probemap_lookup_miss_{}", probe.name()), |b| {
            let mut map = table(probe);
            for x in lcg(11).take(LOAD) {
                let _ = map.insert(&x.to_le_bytes(), x);
            }
            // Keys drawn from a stream disjoint from the populate seed.
            let mut miss = lcg(0xdead_beef);
            b.iter(|| {
                let key = miss.next().unwrap().to_le_bytes();
                black_box(map.get(&key));
            })
        });
    }
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_populate, bench_lookup_hit, bench_lookup_miss
}
criterion_main!(benches);
