use super::Accelerator;
use crate::series::Series;
use crate::traits::FloatScalar;

/// Single Aitken Δ² step with backtracking.
///
/// Computes `Sₘ − (ΔSₘ)²/Δ²Sₘ` at `m = n`, stepping the base index down
/// while the second difference vanishes exactly (a flat stretch of partial
/// sums carries no extrapolation signal). If the second difference is zero
/// all the way down, the division produces the usual non-finite value and
/// propagates.
///
/// `order` only distinguishes the identity transform: any positive order
/// performs the same single step.
#[derive(Debug, Clone, Copy)]
pub struct AitkenDeltaSquared<'a, S> {
    series: &'a S,
}

impl<'a, S> AitkenDeltaSquared<'a, S> {
    /// Bind the transform to a series.
    pub fn new(series: &'a S) -> Self {
        Self { series }
    }
}

impl<'a, T: FloatScalar, S: Series<T>> Accelerator<T> for AitkenDeltaSquared<'a, S> {
    /// # Panics
    ///
    /// Panics unless `n >= 1` (for `order > 0`).
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }
        assert!(n >= 1, "aitken: requires n >= 1");

        let two = T::from(2).unwrap();
        let mut m = n;
        let mut d2 = self.series.partial_sum(m + 2) - two * self.series.partial_sum(m + 1)
            + self.series.partial_sum(m);
        while d2 == T::zero() && m > 0 {
            m -= 1;
            d2 = self.series.partial_sum(m + 2) - two * self.series.partial_sum(m + 1)
                + self.series.partial_sum(m);
        }

        let d = self.series.partial_sum(m + 1) - self.series.partial_sum(m);
        self.series.partial_sum(m) - d * d / d2
    }
}
