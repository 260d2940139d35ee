use super::{check_finite, Series, SeriesError};
use crate::special::factorial;
use crate::FloatScalar;

/// Maclaurin series of cosh x: Σ x²ⁿ/(2n)!.
///
/// Converges for every finite x. All terms are non-negative for real x,
/// which makes this a useful monotone counterpart to [`CosSeries`].
///
/// [`CosSeries`]: super::CosSeries
#[derive(Debug, Clone, Copy)]
pub struct CoshSeries<T> {
    x: T,
    sum: T,
}

impl<T: FloatScalar> CoshSeries<T> {
    /// Create the series for the given argument. Requires finite `x`.
    pub fn new(x: T) -> Result<Self, SeriesError> {
        check_finite(x)?;
        Ok(Self { x, sum: x.cosh() })
    }

    /// The series argument.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for CoshSeries<T> {
    fn term(&self, n: usize) -> T {
        self.x.powi(2 * n as i32) / factorial(2 * n)
    }

    fn limit(&self) -> Option<T> {
        Some(self.sum)
    }

    fn name(&self) -> &'static str {
        "cosh(x)"
    }
}
