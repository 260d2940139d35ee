use super::{check_finite, Series, SeriesError};
use crate::FloatScalar;

/// Geometric series: Σ xⁿ = 1/(1−x).
///
/// Converges for |x| < 1, strict. Partial sums have a purely geometric
/// error term, so the epsilon-family transforms are exact on this series
/// at order 1 — a sharp correctness probe.
#[derive(Debug, Clone, Copy)]
pub struct GeometricSeries<T> {
    x: T,
    sum: T,
}

impl<T: FloatScalar> GeometricSeries<T> {
    /// Create the series for the given argument. Requires finite |x| < 1.
    pub fn new(x: T) -> Result<Self, SeriesError> {
        check_finite(x)?;
        if x.abs() >= T::one() {
            return Err(SeriesError::OutsideDomain);
        }
        Ok(Self { x, sum: (T::one() - x).recip() })
    }

    /// The series argument.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for GeometricSeries<T> {
    fn term(&self, n: usize) -> T {
        self.x.powi(n as i32)
    }

    fn limit(&self) -> Option<T> {
        Some(self.sum)
    }

    fn name(&self) -> &'static str {
        "1/(1-x)"
    }
}
