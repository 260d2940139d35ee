use super::{check_finite, Series, SeriesError};
use crate::FloatScalar;

/// Maclaurin series of asin x: Σ (2n−1)!!/(2n)!! · x²ⁿ⁺¹/(2n+1).
///
/// Converges for |x| ≤ 1, boundary inclusive (the coefficient ratio decays
/// like n^{−3/2} at x = ±1). The (2n−1)!!/(2n)!! coefficient is carried as
/// an incremental product so terms stay finite at every index.
#[derive(Debug, Clone, Copy)]
pub struct ArcsinSeries<T> {
    x: T,
    sum: T,
}

impl<T: FloatScalar> ArcsinSeries<T> {
    /// Create the series for the given argument. Requires finite |x| ≤ 1.
    pub fn new(x: T) -> Result<Self, SeriesError> {
        check_finite(x)?;
        if x.abs() > T::one() {
            return Err(SeriesError::OutsideDomain);
        }
        Ok(Self { x, sum: x.asin() })
    }

    /// The series argument.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for ArcsinSeries<T> {
    fn term(&self, n: usize) -> T {
        let mut coeff = T::one();
        for k in 1..=n {
            coeff = coeff * T::from(2 * k - 1).unwrap() / T::from(2 * k).unwrap();
        }
        coeff * self.x.powi(2 * n as i32 + 1) / T::from(2 * n + 1).unwrap()
    }

    fn limit(&self) -> Option<T> {
        Some(self.sum)
    }

    fn name(&self) -> &'static str {
        "arcsin(x)"
    }
}
