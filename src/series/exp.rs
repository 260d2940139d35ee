use super::{check_finite, Series, SeriesError};
use crate::special::factorial;
use crate::FloatScalar;

/// Maclaurin series of eˣ: Σ xⁿ/n!.
///
/// Converges for every finite x.
///
/// # Example
///
/// ```
/// use celeris::series::{ExpSeries, Series};
///
/// let s = ExpSeries::new(0.5_f64).unwrap();
/// assert!((s.term(2) - 0.125).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExpSeries<T> {
    x: T,
    sum: T,
}

impl<T: FloatScalar> ExpSeries<T> {
    /// Create the series for the given argument. Requires finite `x`.
    pub fn new(x: T) -> Result<Self, SeriesError> {
        check_finite(x)?;
        Ok(Self { x, sum: x.exp() })
    }

    /// The series argument.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for ExpSeries<T> {
    fn term(&self, n: usize) -> T {
        self.x.powi(n as i32) / factorial(n)
    }

    fn limit(&self) -> Option<T> {
        Some(self.sum)
    }

    fn name(&self) -> &'static str {
        "exp(x)"
    }
}
