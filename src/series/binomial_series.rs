use super::{check_finite, Series, SeriesError};
use crate::special::binomial;
use crate::FloatScalar;

/// Binomial series of (1+x)ᵐ: Σ C(m,n) xⁿ, with real exponent m.
///
/// The two-parameter provider of the catalog: `m` selects the series,
/// `x` the evaluation point. Converges for |x| < 1, strict, for any real m.
#[derive(Debug, Clone, Copy)]
pub struct BinomialSeries<T> {
    m: T,
    x: T,
    sum: T,
}

impl<T: FloatScalar> BinomialSeries<T> {
    /// Create the series for exponent `m` at argument `x`.
    /// Requires finite `m` and finite |x| < 1.
    pub fn new(m: T, x: T) -> Result<Self, SeriesError> {
        check_finite(m)?;
        check_finite(x)?;
        if x.abs() >= T::one() {
            return Err(SeriesError::OutsideDomain);
        }
        Ok(Self { m, x, sum: (T::one() + x).powf(m) })
    }

    /// The series exponent.
    pub fn m(&self) -> T {
        self.m
    }

    /// The series argument.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for BinomialSeries<T> {
    fn term(&self, n: usize) -> T {
        binomial(self.m, n) * self.x.powi(n as i32)
    }

    fn limit(&self) -> Option<T> {
        Some(self.sum)
    }

    fn name(&self) -> &'static str {
        "(1+x)^m"
    }
}
