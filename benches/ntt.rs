//! Benchmarks for the negative-wrapped NTT
//!
//! Measures the forward transform, the inverse transform and the full
//! roundtrip at three parameter scales: NewHope, a 100-bit modulus at
//! N = 2048 and a 200-bit modulus at N = 32768.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use negacyclic::{rlwe_prime, uniform_mod, Multiplier};
use num_bigint::BigInt;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn parameter_cases() -> Vec<(&'static str, usize, BigInt)> {
    vec![
        ("newhope", 1024, BigInt::from(12289)),
        ("n2048_100bit", 2048, rlwe_prime(100, 2 * 2048).unwrap()),
        ("n32768_200bit", 1 << 15, rlwe_prime(200, 1 << 16).unwrap()),
    ]
}

fn bench_forward_ntt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntt_forward");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for (label, n, q) in parameter_cases() {
        let m = Multiplier::new(n, &q).expect("multiplier construction failed");
        let poly = uniform_mod(n, &q, &mut rng).expect("sampling failed");
        group.bench_function(label, |b| {
            b.iter_batched(
                || poly.clone(),
                |mut p| {
                    m.ntt(&mut p);
                    black_box(p)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_inverse_ntt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntt_inverse");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for (label, n, q) in parameter_cases() {
        let m = Multiplier::new(n, &q).expect("multiplier construction failed");
        let mut poly = uniform_mod(n, &q, &mut rng).expect("sampling failed");
        m.ntt(&mut poly);
        group.bench_function(label, |b| {
            b.iter_batched(
                || poly.clone(),
                |mut p| {
                    m.intt(&mut p);
                    black_box(p)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_ntt_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntt_roundtrip");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    let n = 1024;
    let q = BigInt::from(12289);
    let m = Multiplier::new(n, &q).expect("multiplier construction failed");
    let poly = uniform_mod(n, &q, &mut rng).expect("sampling failed");
    group.bench_function("newhope", |b| {
        b.iter_batched(
            || poly.clone(),
            |mut p| {
                m.ntt(&mut p);
                m.intt(&mut p);
                black_box(p)
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_forward_ntt,
    bench_inverse_ntt,
    bench_ntt_roundtrip
);
criterion_main!(benches);
