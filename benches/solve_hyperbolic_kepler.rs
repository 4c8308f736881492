use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use flyby::kepler::solve_hyperbolic_kepler;

/// Eccentricity of the nominal 3I/ATLAS orbit.
const ECCENTRICITY: f64 = 6.1095;

/// Near-perihelion regime: |M| <= 1, linearized initial guess.
fn bench_near_perihelion(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_hyperbolic_kepler/near_perihelion", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| rng.random_range(-1.0..=1.0))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for m in cases {
                    let h = solve_hyperbolic_kepler(black_box(m), black_box(ECCENTRICITY)).unwrap();
                    black_box(h);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Far-from-perihelion regime: the asinh seed has to carry the solve.
fn bench_far_from_perihelion(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("solve_hyperbolic_kepler/far_from_perihelion", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        let magnitude = rng.random_range(10.0..=1000.0);
                        if rng.random::<bool>() {
                            magnitude
                        } else {
                            -magnitude
                        }
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for m in cases {
                    let h = solve_hyperbolic_kepler(black_box(m), black_box(ECCENTRICITY)).unwrap();
                    black_box(h);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Fixed low-eccentricity stress case, useful for stability profiling.
fn bench_fixed_stress(c: &mut Criterion) {
    let mean_anomaly = 25.15_f64;
    let eccentricity = 1.05_f64;

    c.bench_function("solve_hyperbolic_kepler/fixed_stress_case", |b| {
        b.iter(|| {
            let h = solve_hyperbolic_kepler(black_box(mean_anomaly), black_box(eccentricity));
            black_box(h.ok());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_near_perihelion, bench_far_from_perihelion, bench_fixed_stress
);
criterion_main!(benches);
