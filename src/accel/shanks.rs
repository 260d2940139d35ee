use alloc::vec;
use alloc::vec::Vec;

use super::Accelerator;
use crate::series::Series;
use crate::traits::FloatScalar;

/// Shanks transformation for non-alternating series.
///
/// Order 1 is Aitken's Δ² process written in terms of the series terms:
/// `e₁(Sₙ) = Sₙ + aₙaₙ₊₁(aₙ+aₙ₊₁)/(aₙ² − aₙ₊₁²)`. Higher orders apply the
/// three-point Shanks recurrence over a table seeded with order-1 values on
/// the window `[n−order, n+order]`.
///
/// # Example
///
/// ```
/// use celeris::accel::{Accelerator, Shanks};
/// use celeris::series::{ExpSeries, Series};
///
/// let s = ExpSeries::new(0.5_f64).unwrap();
/// let t = Shanks::new(&s);
/// // order 0 is the raw partial sum
/// assert!((t.estimate(6, 0) - s.partial_sum(6)).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Shanks<'a, S> {
    series: &'a S,
}

impl<'a, S> Shanks<'a, S> {
    /// Bind the transform to a series.
    pub fn new(series: &'a S) -> Self {
        Self { series }
    }
}

impl<'a, T: FloatScalar, S: Series<T>> Accelerator<T> for Shanks<'a, S> {
    /// # Panics
    ///
    /// Panics unless `n >= order` and `n >= 1` (for `order > 0`): the
    /// order-k table consumes terms down to index `n − order`.
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }
        assert!(n >= order && n >= 1, "shanks: window requires n >= order >= 1");

        if order == 1 {
            let a0 = self.series.term(n);
            let a1 = self.series.term(n + 1);
            return self.series.partial_sum(n) + a0 * a1 * (a0 + a1) / (a0 * a0 - a1 * a1);
        }

        let lo = n - order;
        let hi = n + order;
        let two = T::from(2).unwrap();

        // Level 1 over the full window
        let mut cur = vec![T::zero(); hi + 1];
        for i in (lo + 1)..hi {
            let a0 = self.series.term(i);
            let a1 = self.series.term(i + 1);
            cur[i] = self.series.partial_sum(i) + a0 * a1 * (a0 + a1) / (a0 * a0 - a1 * a1);
        }

        // Levels 2..=order over a shrinking window
        let mut next: Vec<T> = vec![T::zero(); hi + 1];
        for j in 2..=order {
            for i in (lo + j)..=(hi - j) {
                let a = cur[i];
                let b = cur[i - 1];
                let c = cur[i + 1];
                next[i] = a + (a * (c + b - a) - b * c) / (two * a - b - c);
            }
            core::mem::swap(&mut cur, &mut next);
        }

        cur[n]
    }
}

/// Shanks transformation specialized for alternating series.
///
/// Uses the compact order-1 weight `aₙaₙ₊₁/(aₙ − aₙ₊₁)`, which is better
/// conditioned when consecutive terms alternate in sign; the higher-order
/// recurrence is shared with [`Shanks`].
#[derive(Debug, Clone, Copy)]
pub struct ShanksAlternating<'a, S> {
    series: &'a S,
}

impl<'a, S> ShanksAlternating<'a, S> {
    /// Bind the transform to a series.
    pub fn new(series: &'a S) -> Self {
        Self { series }
    }
}

impl<'a, T: FloatScalar, S: Series<T>> Accelerator<T> for ShanksAlternating<'a, S> {
    /// # Panics
    ///
    /// Panics unless `n >= order` and `n >= 1` (for `order > 0`).
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }
        assert!(
            n >= order && n >= 1,
            "shanks (alternating): window requires n >= order >= 1"
        );

        if order == 1 {
            let a0 = self.series.term(n);
            let a1 = self.series.term(n + 1);
            return self.series.partial_sum(n) + a0 * a1 / (a0 - a1);
        }

        let lo = n - order;
        let hi = n + order;
        let two = T::from(2).unwrap();

        let mut cur = vec![T::zero(); hi + 1];
        for i in (lo + 1)..hi {
            let a0 = self.series.term(i);
            let a1 = self.series.term(i + 1);
            cur[i] = self.series.partial_sum(i) + a0 * a1 / (a0 - a1);
        }

        let mut next: Vec<T> = vec![T::zero(); hi + 1];
        for j in 2..=order {
            for i in (lo + j)..=(hi - j) {
                let a = cur[i];
                let b = cur[i - 1];
                let c = cur[i + 1];
                next[i] = a + (a * (c + b - a) - b * c) / (two * a - b - c);
            }
            core::mem::swap(&mut cur, &mut next);
        }

        cur[n]
    }
}
