use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use rand::Rng;
use so3_rotation::{
    ops::{exp_map, log_map},
    Rotation,
};

fn bench_so3(c: &mut Criterion) {
    let mut group = c.benchmark_group("so3");

    let data_size = 1000;
    let omegas: Vec<DVec3> = (0..data_size)
        .map(|_| {
            let mut rng = rand::rng();
            DVec3::new(rng.random(), rng.random(), rng.random())
        })
        .collect();

    let rots: Vec<Rotation> = omegas.iter().map(|&v| Rotation::from_axis_angle(v)).collect();

    group.bench_function(BenchmarkId::new("exp_closed_form", ""), |b| {
        b.iter(|| {
            for omega in omegas.iter() {
                std::hint::black_box(exp_map(std::hint::black_box(*omega), 0));
            }
        })
    });

    for num_terms in [2, 5, 10] {
        group.bench_with_input(
            BenchmarkId::new("exp_series", num_terms),
            &num_terms,
            |b, &num_terms| {
                b.iter(|| {
                    for omega in omegas.iter() {
                        std::hint::black_box(exp_map(std::hint::black_box(*omega), num_terms));
                    }
                })
            },
        );
    }

    group.bench_function(BenchmarkId::new("log", ""), |b| {
        b.iter(|| {
            for rot in rots.iter() {
                std::hint::black_box(log_map(std::hint::black_box(rot.matrix())));
            }
        })
    });

    group.bench_function(BenchmarkId::new("compose", ""), |b| {
        b.iter(|| {
            let mut acc = Rotation::IDENTITY;
            for rot in rots.iter() {
                acc *= std::hint::black_box(*rot);
            }
            std::hint::black_box(acc)
        })
    });

    group.bench_function(BenchmarkId::new("reproject_forced", ""), |b| {
        b.iter(|| {
            for rot in rots.iter() {
                let mut rot = std::hint::black_box(*rot);
                rot.reproject(true);
                std::hint::black_box(rot);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_so3);
criterion_main!(benches);
