use alloc::vec;
use alloc::vec::Vec;

use super::Accelerator;
use crate::series::Series;
use crate::traits::FloatScalar;

/// Wynn's epsilon algorithm (classic table form).
///
/// Builds the epsilon table
/// `ε₋₁⁽ʲ⁾ = 0`, `ε₀⁽ʲ⁾ = Sⱼ`,
/// `εₖ₊₁⁽ʲ⁾ = εₖ₋₁⁽ʲ⁺¹⁾ + 1/(εₖ⁽ʲ⁺¹⁾ − εₖ⁽ʲ⁾)`
/// over `2·order` levels and returns `ε₂ₒᵣ𝒹ₑᵣ⁽ⁿ⁾` — the entry that
/// generalizes the Shanks transform of order `order` applied at `Sₙ`. A
/// singular table propagates the non-finite value.
///
/// # Example
///
/// ```
/// use celeris::accel::{Accelerator, WynnEpsilon};
/// use celeris::series::GeometricSeries;
///
/// // Geometric partial sums: one epsilon sweep is exact
/// let s = GeometricSeries::new(0.5_f64).unwrap();
/// let eps = WynnEpsilon::new(&s);
/// assert!((eps.estimate(3, 1) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WynnEpsilon<'a, S> {
    series: &'a S,
}

impl<'a, S> WynnEpsilon<'a, S> {
    /// Bind the transform to a series.
    pub fn new(series: &'a S) -> Self {
        Self { series }
    }
}

impl<'a, T: FloatScalar, S: Series<T>> Accelerator<T> for WynnEpsilon<'a, S> {
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }

        let levels = 2 * order;
        let total = n + levels; // highest partial-sum index consumed

        let mut prev = vec![T::zero(); total + 2]; // ε₋₁ row
        let mut cur = vec![T::zero(); total + 2];
        for (j, e) in cur.iter_mut().enumerate().take(total + 1) {
            *e = self.series.partial_sum(j);
        }

        let mut next = vec![T::zero(); total + 2];
        for k in 1..=levels {
            for j in 0..=(total - k) {
                next[j] = prev[j + 1] + (cur[j + 1] - cur[j]).recip();
            }
            // rotate rows: prev <- cur <- next, reusing the oldest buffer
            core::mem::swap(&mut prev, &mut cur);
            core::mem::swap(&mut cur, &mut next);
        }

        cur[n]
    }
}

/// Wynn's epsilon algorithm with the singular-rule fallback.
///
/// Keeps the last four epsilon rows and, when the plain recurrence
/// produces a non-finite entry, retries it with the cross rule for
/// singular tables; if that also fails the entry is copied through from
/// two rows back. The sweep runs `2·order + n` levels down to a single
/// entry, so larger windows buy deeper transformation at the cost of more
/// partial sums.
#[derive(Debug, Clone, Copy)]
pub struct WynnEpsilonGuarded<'a, S> {
    series: &'a S,
}

impl<'a, S> WynnEpsilonGuarded<'a, S> {
    /// Bind the transform to a series.
    pub fn new(series: &'a S) -> Self {
        Self { series }
    }
}

impl<'a, T: FloatScalar, S: Series<T>> Accelerator<T> for WynnEpsilonGuarded<'a, S> {
    /// # Panics
    ///
    /// Panics unless `n >= 1` (for `order > 0`).
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }
        assert!(n >= 1, "epsilon (guarded): requires n >= 1");

        let mut k = 2 * order + n;
        let one = T::one();

        // rows[3] is the most recent row; rows[2], rows[1], rows[0] trail it
        let mut rows: [Vec<T>; 4] = [
            vec![T::zero(); k + 1],
            vec![T::zero(); k + 1],
            vec![T::zero(); k + 1],
            vec![T::zero(); k + 1],
        ];
        for (i, e) in rows[3].iter_mut().enumerate() {
            *e = self.series.partial_sum(i);
        }

        while k > 0 {
            for i in 0..k {
                let i1 = i + 1;
                let i2 = i + 2;

                let mut e = rows[2][i1] + (rows[3][i1] - rows[3][i]).recip();

                if !e.is_finite() && i2 <= k {
                    // cross rule for a singular table entry
                    let a2 = rows[2][i1].recip();
                    let mut acc = rows[2][i2] * (one - a2 * rows[2][i2]).recip();
                    acc = acc + rows[2][i] * (one - a2 * rows[2][i]).recip();
                    acc = acc - rows[0][i2] * (one - a2 * rows[0][i2]).recip();

                    e = acc * (one + acc * rows[2][i1].recip()).recip();
                }

                if !e.is_finite() {
                    e = rows[2][i];
                }

                rows[0][i] = e;
            }

            rows.rotate_left(1); // newest row moves into position 3
            k -= 1;
        }

        rows.rotate_left(1);
        // only even-depth rows are limit estimates; parity follows n
        if n & 1 == 1 {
            rows[3][0]
        } else {
            rows[0][0]
        }
    }
}
