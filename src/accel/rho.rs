use super::Accelerator;
use crate::remainder::{ClassicNumerator, RhoNumerator};
use crate::series::Series;
use crate::traits::FloatScalar;

/// Wynn's rho algorithm with a pluggable numerator strategy.
///
/// The rho recurrence
/// `ρₖ⁽ⁿ⁾ = ρₖ₋₂⁽ⁿ⁺¹⁾ + N(n,k)/(ρₖ₋₁⁽ⁿ⁺¹⁾ − ρₖ₋₁⁽ⁿ⁾)`
/// is evaluated recursively, accumulating the moving partial sum as the
/// base index shifts. The numerator `N` comes from the injected
/// [`RhoNumerator`] strategy together with the γ/ρ shift constants —
/// [`ClassicNumerator`] with γ = 1, ρ = 0 is the textbook algorithm,
/// suited to logarithmically convergent series. Only even orders are limit
/// estimates.
///
/// # Example
///
/// ```
/// use celeris::accel::{Accelerator, WynnRho};
/// use celeris::series::ZetaSeries;
///
/// let s = ZetaSeries::new(2.0_f64).unwrap();
/// let rho = WynnRho::new(&s);
/// let est = rho.estimate(4, 4);
/// assert!(est.is_finite());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WynnRho<'a, T, S, N = ClassicNumerator> {
    series: &'a S,
    numerator: N,
    gamma: T,
    rho: T,
}

impl<'a, T: FloatScalar, S> WynnRho<'a, T, S> {
    /// Classic rho algorithm (γ = 1, ρ = 0, term-difference numerator).
    pub fn new(series: &'a S) -> Self {
        Self {
            series,
            numerator: ClassicNumerator,
            gamma: T::one(),
            rho: T::zero(),
        }
    }
}

impl<'a, T: FloatScalar, S, N> WynnRho<'a, T, S, N> {
    /// Rho algorithm with an explicit numerator strategy and shift
    /// constants.
    pub fn with_numerator(series: &'a S, numerator: N, gamma: T, rho: T) -> Self {
        Self { series, numerator, gamma, rho }
    }
}

impl<'a, T: FloatScalar, S: Series<T>, N: RhoNumerator<T>> WynnRho<'a, T, S, N> {
    /// Recursive rho body. `order` of −1 is the ε-style zero row; `sum`
    /// carries S(n) forward as the base index shifts by `j`.
    fn body(&self, n: usize, order: isize, sum: T, j: usize) -> T {
        let sum = if j == 0 {
            sum
        } else {
            sum + self.series.term(n + j)
        };

        if order < 0 {
            return T::zero();
        }
        if order == 0 {
            return sum;
        }

        let nj = n + j;
        self.body(nj, order - 2, sum, 1)
            + self
                .numerator
                .numerator(nj, order as usize, self.series, self.gamma, self.rho)
                / (self.body(nj, order - 1, sum, 1) - self.body(nj, order - 1, sum, 0))
    }
}

impl<'a, T: FloatScalar, S: Series<T>, N: RhoNumerator<T>> Accelerator<T>
    for WynnRho<'a, T, S, N>
{
    /// # Panics
    ///
    /// Panics if `order` is odd: odd rho entries are auxiliary reciprocal
    /// differences, not limit estimates.
    fn estimate(&self, n: usize, order: usize) -> T {
        assert!(order & 1 == 0, "rho: order must be even");
        if order == 0 {
            return self.series.partial_sum(n);
        }

        let sum = self.series.partial_sum(n);
        let k = order as isize;
        self.body(n, k - 2, sum, 1)
            + self.numerator.numerator(n, order, self.series, self.gamma, self.rho)
                / (self.body(n, k - 1, sum, 1) - self.body(n, k - 1, sum, 0))
    }
}
