use alloc::vec;

use super::Accelerator;
use crate::series::Series;
use crate::traits::FloatScalar;

/// Chang's generalization of Wynn's epsilon algorithm.
///
/// Seeds the even table row with the modified order-2 entries
///
/// ```text
/// T₂⁽ⁱ⁾ = S(i+1) − ΔS(i)·ΔS(i+1)·Δ²S(i+1) / (ΔS(i+2)·Δ²S(i) − ΔS(i)·Δ²S(i+1))
/// ```
///
/// and the factor row `F⁽ⁱ⁾ = Δ²S(i+1)·Δ²S(i) / (…)`, then runs the
/// epsilon-style recurrence with the order-dependent numerator `1 − k + kF`.
/// The table depth is governed by the window `n` (kept even); if an entry
/// goes non-finite the sweep stops at the last stable depth. `order` only
/// distinguishes the identity transform.
#[derive(Debug, Clone, Copy)]
pub struct ChangWynn<'a, S> {
    series: &'a S,
}

impl<'a, S> ChangWynn<'a, S> {
    /// Bind the transform to a series.
    pub fn new(series: &'a S) -> Self {
        Self { series }
    }
}

impl<'a, T: FloatScalar, S: Series<T>> Accelerator<T> for ChangWynn<'a, S> {
    /// # Panics
    ///
    /// Panics unless `n >= 2` (for `order > 0`): the seed rows difference
    /// three partial sums ahead of the base index.
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }
        assert!(n >= 2, "chang-wynn: requires n >= 2");

        let one = T::one();
        let two = T::from(2).unwrap();
        let mut max = n - (n & 1);

        // odd row (reciprocal differences) and even row (estimates)
        let mut odd = vec![T::zero(); n];
        let mut even = vec![T::zero(); n];
        let mut f = vec![T::zero(); n];

        for (i, e) in odd.iter_mut().enumerate().take(max) {
            *e = self.series.term(i + 1).recip();
        }

        for i in 0..max {
            let d2_hi = self.series.partial_sum(i + 3) - two * self.series.partial_sum(i + 2)
                + self.series.partial_sum(i + 1);
            let d2_lo = self.series.partial_sum(i + 2) - two * self.series.partial_sum(i + 1)
                + self.series.partial_sum(i);

            let up = self.series.term(i + 1) * self.series.term(i + 2) * d2_hi;
            let down =
                (self.series.term(i + 3) * d2_lo - self.series.term(i + 1) * d2_hi).recip();

            even[i] = self.series.partial_sum(i + 1) - up * down;
            f[i] = d2_hi * d2_lo * down;
        }

        // rows alternate: `odd` holds level k−1, `even` holds level k
        let mut k = 2;
        while k <= max {
            let kt = T::from(k).unwrap();
            for i in 0..(max - k) {
                let up = kt * f[i] + (one - kt);
                odd[i] = up / (even[i + 1] - even[i]) + odd[i + 1];
                if !odd[i].is_finite() {
                    max = k + i + 1; // stop at the last stable depth
                    break;
                }
            }
            core::mem::swap(&mut odd, &mut even);
            k += 1;
        }

        if max & 1 == 0 {
            odd[0]
        } else {
            even[0]
        }
    }
}
