use criterion::{criterion_group, criterion_main, Criterion};

use celeris::accel::{Accelerator, Levin, LevinSidiT, Shanks, WynnEpsilon};
use celeris::remainder::{TKernel, UKernel};
use celeris::series::ArctanSeries;

// ---------------------------------------------------------------------------
// All benchmarks accelerate the Leibniz series for π: slow enough that the
// transforms do real work, cheap enough per term that the recurrences dominate.
// ---------------------------------------------------------------------------

fn leibniz() -> ArctanSeries<f64> {
    ArctanSeries::new(1.0).unwrap()
}

fn shanks_orders(c: &mut Criterion) {
    let s = leibniz();
    let t = Shanks::new(&s);

    let mut g = c.benchmark_group("shanks");
    for order in [2usize, 4, 8] {
        g.bench_function(format!("order_{}", order), |b| {
            b.iter(|| t.estimate(std::hint::black_box(10), std::hint::black_box(order)))
        });
    }
    g.finish();
}

fn epsilon_orders(c: &mut Criterion) {
    let s = leibniz();
    let t = WynnEpsilon::new(&s);

    let mut g = c.benchmark_group("wynn_epsilon");
    for order in [2usize, 4, 8] {
        g.bench_function(format!("order_{}", order), |b| {
            b.iter(|| t.estimate(std::hint::black_box(10), std::hint::black_box(order)))
        });
    }
    g.finish();
}

fn levin_modes(c: &mut Criterion) {
    let s = leibniz();
    let direct = Levin::new(&s, UKernel::default(), 1.0, false).unwrap();
    let recursive = Levin::new(&s, UKernel::default(), 1.0, true).unwrap();

    let mut g = c.benchmark_group("levin_u");
    g.bench_function("direct", |b| {
        b.iter(|| direct.estimate(std::hint::black_box(2), std::hint::black_box(8)))
    });
    g.bench_function("recursive", |b| {
        b.iter(|| recursive.estimate(std::hint::black_box(2), std::hint::black_box(8)))
    });
    g.finish();
}

fn levin_sidi_modes(c: &mut Criterion) {
    let s = leibniz();
    let direct = LevinSidiT::new(&s, TKernel, 1.0, false).unwrap();
    let recursive = LevinSidiT::new(&s, TKernel, 1.0, true).unwrap();

    let mut g = c.benchmark_group("levin_sidi_t");
    g.bench_function("direct", |b| {
        b.iter(|| direct.estimate(std::hint::black_box(2), std::hint::black_box(8)))
    });
    g.bench_function("recursive", |b| {
        b.iter(|| recursive.estimate(std::hint::black_box(2), std::hint::black_box(8)))
    });
    g.finish();
}

criterion_group!(benches, shanks_orders, epsilon_orders, levin_modes, levin_sidi_modes);
criterion_main!(benches);
