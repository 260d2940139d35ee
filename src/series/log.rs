use super::{check_finite, Series, SeriesError};
use crate::special::alternating_sign;
use crate::FloatScalar;

/// Mercator series of ln(1+x): Σ_{n≥1} (−1)ⁿ⁺¹ xⁿ/n.
///
/// Converges for −1 < x ≤ 1 (divergent at x = −1, conditionally convergent
/// at x = 1 where it sums to ln 2 — the alternating harmonic series).
/// Indexing starts at the constant term, so `term(0) = 0`.
#[derive(Debug, Clone, Copy)]
pub struct Ln1PlusXSeries<T> {
    x: T,
    sum: T,
}

impl<T: FloatScalar> Ln1PlusXSeries<T> {
    /// Create the series for the given argument. Requires finite −1 < x ≤ 1.
    pub fn new(x: T) -> Result<Self, SeriesError> {
        check_finite(x)?;
        if x <= -T::one() || x > T::one() {
            return Err(SeriesError::OutsideDomain);
        }
        Ok(Self { x, sum: x.ln_1p() })
    }

    /// The series argument.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for Ln1PlusXSeries<T> {
    fn term(&self, n: usize) -> T {
        if n == 0 {
            return T::zero();
        }
        alternating_sign::<T>(n + 1) * self.x.powi(n as i32) / T::from(n).unwrap()
    }

    fn limit(&self) -> Option<T> {
        Some(self.sum)
    }

    fn name(&self) -> &'static str {
        "ln(1+x)"
    }
}
