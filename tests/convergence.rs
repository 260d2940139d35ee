//! End-to-end acceleration properties on series with known limits.

use celeris::accel::{
    Accelerator, BrezinskiTheta, DrummondD, Levin, LevinSidiT, LevinSidiU, LubkinW, Shanks,
    ShanksAlternating, WenigerDelta, WynnEpsilon,
};
use celeris::remainder::{TKernel, UKernel};
use celeris::series::{
    ArcsinSeries, ArctanSeries, ExpSeries, Ln1PlusXSeries, Series, SeriesError, ZetaSeries,
};

const TOL: f64 = 1e-3;

fn assert_closer(est: f64, raw: f64, limit: f64, msg: &str) {
    let e = (est - limit).abs();
    let r = (raw - limit).abs();
    assert!(e < r, "{}: accelerated {} vs raw {}", msg, e, r);
}

// ── Concrete scenarios ───────────────────────────────────────────────

#[test]
fn shanks_on_exp_half() {
    let s = ExpSeries::new(0.5_f64).unwrap();
    let shanks = Shanks::new(&s);

    // order 0 degenerates to the raw sum
    assert!((shanks.estimate(6, 0) - s.partial_sum(6)).abs() < TOL);

    // order >= 2 lands closer to e^0.5 than the raw sum
    let limit = 0.5_f64.exp();
    assert!((limit - 1.6487212707).abs() < 1e-9);
    assert_closer(shanks.estimate(6, 2), s.partial_sum(6), limit, "shanks order 2");
}

#[test]
fn lubkin_on_exp_half() {
    let s = ExpSeries::new(0.5_f64).unwrap();
    let w = LubkinW::new(&s);
    assert!((w.estimate(6, 0) - s.partial_sum(6)).abs() < TOL);
}

// ── Acceleration beats the raw window across families ────────────────

#[test]
fn alternating_families_beat_raw_sums_on_leibniz() {
    let s = ArctanSeries::new(1.0_f64).unwrap();
    let pi = core::f64::consts::PI;

    let shanks = ShanksAlternating::new(&s);
    assert_closer(shanks.estimate(8, 3), s.partial_sum(11), pi, "shanks-alt");

    let eps = WynnEpsilon::new(&s);
    assert_closer(eps.estimate(8, 4), s.partial_sum(16), pi, "epsilon");

    let levin = Levin::new(&s, UKernel::default(), 1.0, false).unwrap();
    assert_closer(levin.estimate(1, 8), s.partial_sum(9), pi, "levin-u");

    let weniger = WenigerDelta::new(&s);
    assert_closer(weniger.estimate(0, 8), s.partial_sum(8), pi, "weniger");

    let theta = BrezinskiTheta::new(&s);
    assert_closer(theta.estimate(2, 4), s.partial_sum(8), pi, "theta");
}

#[test]
fn levin_family_digs_out_alternating_harmonic() {
    let s = Ln1PlusXSeries::new(1.0_f64).unwrap();
    let ln2 = 2.0_f64.ln();

    // ~10 terms of a series whose raw error is still ~5e-2
    let levin = Levin::new(&s, UKernel::default(), 1.0, false).unwrap();
    assert!((levin.estimate(1, 8) - ln2).abs() < 1e-7);

    let sidi = LevinSidiU::new(&s, UKernel::default(), 1.0, false).unwrap();
    assert!((sidi.estimate(1, 8) - ln2).abs() < 1e-6);

    let drummond = DrummondD::new(&s, TKernel, false);
    assert!((drummond.estimate(1, 8) - ln2).abs() < 1e-4);
}

// ── Recursive and tabular modes agree ────────────────────────────────

#[test]
fn recursive_vs_tabular_equivalence() {
    let s = Ln1PlusXSeries::new(1.0_f64).unwrap();

    let direct = LevinSidiT::new(&s, TKernel, 1.0, false).unwrap();
    let recur = LevinSidiT::new(&s, TKernel, 1.0, true).unwrap();
    for n in 1..=3 {
        for order in 1..=4 {
            let a = direct.estimate(n, order);
            let b = recur.estimate(n, order);
            assert!(
                ((a - b) / a).abs() < 1e-6,
                "(n, order) = ({}, {}): {} vs {}",
                n,
                order,
                a,
                b
            );
        }
    }
}

// ── Idempotence across call sites ────────────────────────────────────

#[test]
fn estimates_are_reproducible() {
    let s = ArctanSeries::new(1.0_f64).unwrap();
    let eps = WynnEpsilon::new(&s);
    let first = eps.estimate(8, 4);
    for _ in 0..3 {
        assert_eq!(eps.estimate(8, 4), first);
    }
}

// ── Constructor boundaries ───────────────────────────────────────────

#[test]
fn constructor_boundaries() {
    assert_eq!(ArcsinSeries::new(1.5_f64).unwrap_err(), SeriesError::OutsideDomain);
    assert!(ArcsinSeries::new(1.0_f64).is_ok());

    assert_eq!(ZetaSeries::new(1.0_f64).unwrap_err(), SeriesError::OutsideDomain);
    assert!(ZetaSeries::new(1.0000001_f64).is_ok());
}
