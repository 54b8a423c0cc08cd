use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grove::cluster::{Clustering, Dbscan, NeighborIndex};
use grove::{SectorScatter, Site};
use rand::prelude::*;

fn bench_generate(c: &mut Criterion) {
    let site = Site::default();
    let scatter = SectorScatter::default();

    c.bench_function("scatter_n500_k4", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| scatter.generate(black_box(500), &site, &mut rng).unwrap())
    });
}

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    let points = SectorScatter::default()
        .with_max_points(None)
        .generate_seeded(2_000, &Site::default(), Some(42))
        .unwrap();

    for (name, index) in [("brute", NeighborIndex::BruteForce), ("grid", NeighborIndex::Grid)] {
        group.bench_function(format!("fit_n2000_eps15_{name}"), |b| {
            let model = Dbscan::new(15.0, 4).with_index(index);
            b.iter(|| model.fit(black_box(&points)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_dbscan);
criterion_main!(benches);
