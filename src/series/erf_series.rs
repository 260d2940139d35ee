use super::{check_finite, Series, SeriesError};
use crate::special::{double_factorial, erf};
use crate::FloatScalar;

/// Series of eˣ²·erf x: Σ x²ⁿ⁺¹/Γ(n+3/2).
///
/// Converges for every finite x. The gamma denominator is evaluated through
/// the exact identity Γ(n+3/2) = (2n+1)!!·√π/2ⁿ⁺¹.
///
/// Unlike every other provider, term evaluation here checks its own result:
/// for large |x| the x²ⁿ⁺¹ numerator can overflow `T` before the double
/// factorial catches up, and that overflow is reported as an explicit
/// failure rather than leaking a non-finite value into a transform.
#[derive(Debug, Clone, Copy)]
pub struct ExpSquaredErfSeries<T> {
    x: T,
    sum: T,
}

impl<T: FloatScalar> ExpSquaredErfSeries<T> {
    /// Create the series for the given argument. Requires finite `x`.
    pub fn new(x: T) -> Result<Self, SeriesError> {
        check_finite(x)?;
        Ok(Self { x, sum: (x * x).exp() * erf(x) })
    }

    /// The series argument.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for ExpSquaredErfSeries<T> {
    /// # Panics
    ///
    /// Panics if the term overflows the value range of `T`.
    fn term(&self, n: usize) -> T {
        let two = T::from(2).unwrap();
        let sqrt_pi = T::from(core::f64::consts::PI).unwrap().sqrt();
        // Γ(n+3/2) = (2n+1)!!·√π/2ⁿ⁺¹
        let gamma = double_factorial::<T>(2 * n + 1) * sqrt_pi / two.powi(n as i32 + 1);
        let t = self.x.powi(2 * n as i32 + 1) / gamma;
        assert!(t.is_finite(), "exp(x^2)*erf(x) term overflowed at index {}", n);
        t
    }

    fn limit(&self) -> Option<T> {
        Some(self.sum)
    }

    fn name(&self) -> &'static str {
        "exp(x^2)*erf(x)"
    }
}
