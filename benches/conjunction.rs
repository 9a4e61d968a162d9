use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orbitwatch::scenario::SyntheticConstellationConfig;
use orbitwatch::time::linspace;
use orbitwatch::{check_close_approaches, sweep_separations};

fn bench_close_approaches(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_close_approaches");
    for count in [5usize, 20, 50] {
        let bodies = SyntheticConstellationConfig::new()
            .with_count(count)
            .with_inclination_range(0.0, 90.0)
            .with_random_phase(true)
            .generate()
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &bodies, |b, bodies| {
            b.iter(|| check_close_approaches(black_box(bodies), black_box(3.7), 0.8))
        });
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let bodies = SyntheticConstellationConfig::new()
        .with_count(20)
        .with_random_phase(true)
        .generate()
        .unwrap();
    let times = linspace(0.0, 20.0, 401);
    c.bench_function("sweep_separations_20x401", |b| {
        b.iter(|| sweep_separations(black_box(&bodies), black_box(&times)))
    });
}

criterion_group!(benches, bench_close_approaches, bench_sweep);
criterion_main!(benches);
