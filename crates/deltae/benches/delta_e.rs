use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deltae::{
    delta_e_cie76, delta_e_cie94, delta_e_ciede2000, delta_e_cmc, Cie94Weights, Ciede2000Weights,
    CmcWeights,
};

pub fn run_benchmarks(c: &mut Criterion) {
    let reference = [36.0, 60.0, 41.0];
    let sample = [55.0, 66.0, 77.0];
    let gray = [50.0, 0.0, 0.0];

    let mut group = c.benchmark_group("delta-e");

    group.bench_function("cie76", |b| {
        b.iter(|| delta_e_cie76(black_box(&reference), black_box(&sample)))
    });

    let cmc = CmcWeights::default();
    group.bench_function("cmc", |b| {
        b.iter(|| delta_e_cmc(black_box(&reference), black_box(&sample), &cmc))
    });

    let cie94 = Cie94Weights::default();
    group.bench_function("cie94", |b| {
        b.iter(|| delta_e_cie94(black_box(&reference), black_box(&sample), &cie94))
    });

    let ciede2000 = Ciede2000Weights::default();
    group.bench_function("ciede2000", |b| {
        b.iter(|| delta_e_ciede2000(black_box(&reference), black_box(&sample), &ciede2000))
    });

    group.bench_function("ciede2000-achromatic", |b| {
        b.iter(|| delta_e_ciede2000(black_box(&gray), black_box(&sample), &ciede2000))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
