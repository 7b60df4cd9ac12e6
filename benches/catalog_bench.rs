use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glprint::corpus::{FingerprintRecord, Store, Weights};
use glprint::{Fingerprint, Os};

fn synthetic_store(rows: usize) -> Store {
    let records = (0..rows)
        .map(|i| {
            FingerprintRecord::new(
                format!("Vendor {}", i % 23),
                format!("Renderer {}", i % 4_000),
                Weights::new([(i % 50) as u32, (i % 9) as u32, (i % 4) as u32]),
                Fingerprint::default(),
            )
        })
        .collect();
    Store::from_records(records)
}

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_catalog");

    group.bench_function("derive_all_pairs_cold", |b| {
        b.iter_with_setup(
            || synthetic_store(10_000),
            |store| black_box(store.catalog().all_pairs()),
        );
    });

    let store = synthetic_store(10_000);
    store.catalog().pairs_for(Os::Windows);
    group.bench_function("pairs_for_cached", |b| {
        b.iter(|| black_box(store.catalog().pairs_for(Os::Windows).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_catalog);
criterion_main!(benches);
