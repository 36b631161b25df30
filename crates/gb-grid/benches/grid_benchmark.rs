use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gb_grid::HierarchicalBinomialModel;
use std::hint::black_box;

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_update");
    let model = HierarchicalBinomialModel::with_defaults(9, 3).unwrap();

    for n in [50usize, 100, 200] {
        group.bench_with_input(BenchmarkId::new("full_pipeline", n), &n, |b, &nn| {
            b.iter(|| {
                let u = model.update(nn).unwrap();
                black_box(u.evidence)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
