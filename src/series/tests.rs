use super::*;

// ======================== Domain validation ========================

#[test]
fn arcsin_domain_boundary() {
    // Boundary inclusive
    assert!(ArcsinSeries::new(1.0_f64).is_ok());
    assert!(ArcsinSeries::new(-1.0_f64).is_ok());
    assert_eq!(ArcsinSeries::new(1.5_f64).unwrap_err(), SeriesError::OutsideDomain);
    assert_eq!(ArcsinSeries::new(-1.0001_f64).unwrap_err(), SeriesError::OutsideDomain);
}

#[test]
fn zeta_domain_boundary() {
    // Strictly greater than 1
    assert_eq!(ZetaSeries::new(1.0_f64).unwrap_err(), SeriesError::OutsideDomain);
    assert!(ZetaSeries::new(1.0000001_f64).is_ok());
    assert_eq!(ZetaSeries::new(0.5_f64).unwrap_err(), SeriesError::OutsideDomain);
}

#[test]
fn geometric_domain_strict() {
    assert!(GeometricSeries::new(0.999_f64).is_ok());
    assert_eq!(GeometricSeries::new(1.0_f64).unwrap_err(), SeriesError::OutsideDomain);
    assert_eq!(GeometricSeries::new(-1.0_f64).unwrap_err(), SeriesError::OutsideDomain);
}

#[test]
fn ln1p_domain_half_open() {
    assert!(Ln1PlusXSeries::new(1.0_f64).is_ok());
    assert!(Ln1PlusXSeries::new(-0.999_f64).is_ok());
    assert_eq!(Ln1PlusXSeries::new(-1.0_f64).unwrap_err(), SeriesError::OutsideDomain);
    assert_eq!(Ln1PlusXSeries::new(1.1_f64).unwrap_err(), SeriesError::OutsideDomain);
}

#[test]
fn non_finite_arguments_rejected() {
    assert_eq!(ExpSeries::new(f64::NAN).unwrap_err(), SeriesError::NonFiniteArgument);
    assert_eq!(ExpSeries::new(f64::INFINITY).unwrap_err(), SeriesError::NonFiniteArgument);
    assert_eq!(CosSeries::new(f64::NAN).unwrap_err(), SeriesError::NonFiniteArgument);
    assert_eq!(ZetaSeries::new(f64::INFINITY).unwrap_err(), SeriesError::NonFiniteArgument);
    assert_eq!(
        BinomialSeries::new(f64::NAN, 0.5).unwrap_err(),
        SeriesError::NonFiniteArgument
    );
}

// ======================== Term formulas ========================

#[test]
fn exp_terms() {
    let s = ExpSeries::new(2.0_f64).unwrap();
    assert!((s.term(0) - 1.0).abs() < 1e-14);
    assert!((s.term(1) - 2.0).abs() < 1e-14);
    assert!((s.term(3) - 8.0 / 6.0).abs() < 1e-14);
}

#[test]
fn cos_sin_terms() {
    let c = CosSeries::new(1.0_f64).unwrap();
    assert!((c.term(0) - 1.0).abs() < 1e-14);
    assert!((c.term(1) + 0.5).abs() < 1e-14);
    let s = SinSeries::new(1.0_f64).unwrap();
    assert!((s.term(0) - 1.0).abs() < 1e-14);
    assert!((s.term(1) + 1.0 / 6.0).abs() < 1e-14);
}

#[test]
fn arcsin_terms() {
    let s = ArcsinSeries::new(0.5_f64).unwrap();
    // a₀ = x, a₁ = (1/2)·x³/3
    assert!((s.term(0) - 0.5).abs() < 1e-14);
    assert!((s.term(1) - 0.5 * 0.125 / 3.0).abs() < 1e-14);
}

#[test]
fn ln1p_and_zeta_skip_constant_term() {
    let l = Ln1PlusXSeries::new(1.0_f64).unwrap();
    assert_eq!(l.term(0), 0.0);
    assert!((l.term(1) - 1.0).abs() < 1e-14);
    assert!((l.term(2) + 0.5).abs() < 1e-14);

    let z = ZetaSeries::new(2.0_f64).unwrap();
    assert_eq!(z.term(0), 0.0);
    assert!((z.term(3) - 1.0 / 9.0).abs() < 1e-14);
}

#[test]
fn binomial_series_terms() {
    // (1+x)^2 = 1 + 2x + x², truncating exactly
    let b = BinomialSeries::new(2.0_f64, 0.25).unwrap();
    assert!((b.term(0) - 1.0).abs() < 1e-14);
    assert!((b.term(1) - 0.5).abs() < 1e-14);
    assert!((b.term(2) - 0.0625).abs() < 1e-14);
    assert!(b.term(3).abs() < 1e-14);
    assert!((b.partial_sum(2) - b.limit().unwrap()).abs() < 1e-14);
}

// ======================== Partial sums and limits ========================

#[test]
fn partial_sum_matches_manual_accumulation() {
    let s = ExpSeries::new(0.5_f64).unwrap();
    let manual: f64 = (0..=6).map(|i| s.term(i)).sum();
    assert!((s.partial_sum(6) - manual).abs() < 1e-15);
}

#[test]
fn partial_sums_converge_to_limit() {
    let s = ExpSeries::new(0.5_f64).unwrap();
    assert!((s.partial_sum(20) - s.limit().unwrap()).abs() < 1e-14);

    let g = GeometricSeries::new(0.5_f64).unwrap();
    assert!((g.partial_sum(40) - 2.0).abs() < 1e-11);

    let a = ArctanSeries::new(1.0_f64).unwrap();
    // Leibniz series: error after n terms ~ 4/(2n+3)
    assert!((a.partial_sum(100) - core::f64::consts::PI).abs() < 0.02);
}

#[test]
fn erf_series_limit_and_terms() {
    let s = ExpSquaredErfSeries::new(1.0_f64).unwrap();
    // a₀ = x/Γ(3/2) = 2x/√π
    let expected = 2.0 / core::f64::consts::PI.sqrt();
    assert!((s.term(0) - expected).abs() < 1e-14);
    // the series sums to e^{x²}·erf(x)
    assert!((s.partial_sum(30) - s.limit().unwrap()).abs() < 1e-12);
}

#[test]
fn zeta_has_no_closed_form() {
    let z = ZetaSeries::new(2.0_f64).unwrap();
    assert!(z.limit().is_none());
    // but the partial sums head toward π²/6
    let pi2_6 = core::f64::consts::PI.powi(2) / 6.0;
    assert!((z.partial_sum(1000) - pi2_6).abs() < 1.1e-3);
}

// ======================== Term finiteness across the domain ========================

#[test]
fn terms_finite_across_domain() {
    for &x in &[-1.0_f64, -0.5, 0.0, 0.5, 1.0] {
        let s = ArcsinSeries::new(x).unwrap();
        for n in 0..200 {
            assert!(s.term(n).is_finite(), "arcsin term {} at x = {}", n, x);
        }
    }
    for &x in &[-4.0_f64, 0.0, 4.0] {
        let s = ExpSeries::new(x).unwrap();
        for n in 0..300 {
            assert!(s.term(n).is_finite(), "exp term {} at x = {}", n, x);
        }
    }
    let z = ZetaSeries::new(1.0000001_f64).unwrap();
    for n in 0..100 {
        assert!(z.term(n).is_finite());
    }
}

#[test]
#[should_panic(expected = "overflowed")]
fn erf_series_term_overflow_is_explicit() {
    // x = 40: x^{2n+1} overflows f64 near n ≈ 95 while (2n+1)!! is still finite
    let s = ExpSquaredErfSeries::new(40.0_f64).unwrap();
    let mut acc = 0.0;
    for n in 0..200 {
        acc += s.term(n);
    }
    let _ = acc;
}
