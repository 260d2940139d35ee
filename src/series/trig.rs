use super::{check_finite, Series, SeriesError};
use crate::special::{alternating_sign, factorial};
use crate::FloatScalar;

/// Maclaurin series of cos x: Σ (−1)ⁿ x²ⁿ/(2n)!.
///
/// Converges for every finite x.
#[derive(Debug, Clone, Copy)]
pub struct CosSeries<T> {
    x: T,
    sum: T,
}

impl<T: FloatScalar> CosSeries<T> {
    /// Create the series for the given argument. Requires finite `x`.
    pub fn new(x: T) -> Result<Self, SeriesError> {
        check_finite(x)?;
        Ok(Self { x, sum: x.cos() })
    }

    /// The series argument.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for CosSeries<T> {
    fn term(&self, n: usize) -> T {
        alternating_sign::<T>(n) * self.x.powi(2 * n as i32) / factorial(2 * n)
    }

    fn limit(&self) -> Option<T> {
        Some(self.sum)
    }

    fn name(&self) -> &'static str {
        "cos(x)"
    }
}

/// Maclaurin series of sin x: Σ (−1)ⁿ x²ⁿ⁺¹/(2n+1)!.
///
/// Converges for every finite x.
#[derive(Debug, Clone, Copy)]
pub struct SinSeries<T> {
    x: T,
    sum: T,
}

impl<T: FloatScalar> SinSeries<T> {
    /// Create the series for the given argument. Requires finite `x`.
    pub fn new(x: T) -> Result<Self, SeriesError> {
        check_finite(x)?;
        Ok(Self { x, sum: x.sin() })
    }

    /// The series argument.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for SinSeries<T> {
    fn term(&self, n: usize) -> T {
        alternating_sign::<T>(n) * self.x.powi(2 * n as i32 + 1) / factorial(2 * n + 1)
    }

    fn limit(&self) -> Option<T> {
        Some(self.sum)
    }

    fn name(&self) -> &'static str {
        "sin(x)"
    }
}
