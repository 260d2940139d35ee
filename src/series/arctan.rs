use super::{check_finite, Series, SeriesError};
use crate::special::alternating_sign;
use crate::FloatScalar;

/// Gregory series of 4·atan x: 4·Σ (−1)ⁿ x²ⁿ⁺¹/(2n+1).
///
/// Converges for |x| ≤ 1, boundary inclusive. At x = 1 this is the Leibniz
/// series for π — painfully slow raw convergence, which makes it the
/// canonical stress test for the alternating-series transforms.
#[derive(Debug, Clone, Copy)]
pub struct ArctanSeries<T> {
    x: T,
    sum: T,
}

impl<T: FloatScalar> ArctanSeries<T> {
    /// Create the series for the given argument. Requires finite |x| ≤ 1.
    pub fn new(x: T) -> Result<Self, SeriesError> {
        check_finite(x)?;
        if x.abs() > T::one() {
            return Err(SeriesError::OutsideDomain);
        }
        let four = T::from(4).unwrap();
        Ok(Self { x, sum: four * x.atan() })
    }

    /// The series argument.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for ArctanSeries<T> {
    fn term(&self, n: usize) -> T {
        let four = T::from(4).unwrap();
        four * alternating_sign::<T>(n) * self.x.powi(2 * n as i32 + 1)
            / T::from(2 * n + 1).unwrap()
    }

    fn limit(&self) -> Option<T> {
        Some(self.sum)
    }

    fn name(&self) -> &'static str {
        "4·arctan(x)"
    }
}
