use super::{check_finite, Series, SeriesError};
use crate::FloatScalar;

/// Dirichlet series of the Riemann zeta function: Σ_{n≥1} n⁻ˣ.
///
/// Converges for x > 1, strict — the harmonic boundary x = 1 diverges.
/// Indexing starts at the constant term, so `term(0) = 0`. No closed-form
/// sum is stored ([`Series::limit`] returns `None`); the logarithmic decay
/// of the partial-sum error makes this the standard target for the rho-type
/// transforms.
#[derive(Debug, Clone, Copy)]
pub struct ZetaSeries<T> {
    x: T,
}

impl<T: FloatScalar> ZetaSeries<T> {
    /// Create the series for the given exponent. Requires finite x > 1.
    pub fn new(x: T) -> Result<Self, SeriesError> {
        check_finite(x)?;
        if x <= T::one() {
            return Err(SeriesError::OutsideDomain);
        }
        Ok(Self { x })
    }

    /// The series exponent.
    pub fn x(&self) -> T {
        self.x
    }
}

impl<T: FloatScalar> Series<T> for ZetaSeries<T> {
    fn term(&self, n: usize) -> T {
        if n == 0 {
            return T::zero();
        }
        T::from(n).unwrap().powf(-self.x)
    }

    fn name(&self) -> &'static str {
        "zeta(x)"
    }
}
