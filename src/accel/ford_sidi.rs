use alloc::vec::Vec;

use super::Accelerator;
use crate::series::Series;
use crate::traits::FloatScalar;

/// Ford-Sidi algorithm (generalized Richardson extrapolation).
///
/// Runs the ψ recurrence of Ford & Sidi over four parallel tables — the
/// weighted partial sums `ψ(s)`, the normalizers `ψ(1)`, the auxiliary
/// rows `ψ(gᵢ)`, and the seed factors `g` — with the Levin-style auxiliary
/// family `gᵢ(l) = a(l)·(1+l)^{1−i}`:
///
/// ```text
/// ψ₀⁽ʲ⁾(u)  = u(n+j)/g₁(n+j)
/// ψₖ⁽ʲ⁾(u)  = (ψₖ₋₁⁽ʲ⁺¹⁾(u) − ψₖ₋₁⁽ʲ⁾(u)) / (ψₖ₋₁⁽ʲ⁺¹⁾(gₖ₊₁) − ψₖ₋₁⁽ʲ⁾(gₖ₊₁))
/// T(n,k)    = ψₖ⁽⁰⁾(s) / ψₖ⁽⁰⁾(1)
/// ```
///
/// Each level consumes one auxiliary row, so the `ψ(gᵢ)` table shrinks by
/// a row per level while the sweep walks the columns in place; entries
/// `[i][j]` are only valid for `j ≤ order − k` at level k and the access
/// pattern never leaves that triangle. With this auxiliary family the
/// transform reproduces the Levin t-type estimate through different — and
/// often better-conditioned — bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct FordSidi<'a, S> {
    series: &'a S,
}

impl<'a, S> FordSidi<'a, S> {
    /// Bind the transform to a series.
    pub fn new(series: &'a S) -> Self {
        Self { series }
    }
}

impl<'a, T: FloatScalar, S: Series<T>> Accelerator<T> for FordSidi<'a, S> {
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }

        let cols = order + 1;

        // seed factors g_i(l) for columns l = n..=n+order, i = 1..=order+1
        let g = |i: usize, l: usize| -> T {
            self.series.term(l) * T::from(1 + l).unwrap().powi(1 - i as i32)
        };

        let mut psi_s: Vec<T> = (0..cols)
            .map(|j| self.series.partial_sum(n + j) / g(1, n + j))
            .collect();
        let mut psi_one: Vec<T> = (0..cols).map(|j| g(1, n + j).recip()).collect();
        // psi_g[i] carries ψ(g_{i+2}); row i is consumed at level i+1
        let mut psi_g: Vec<Vec<T>> = (0..order)
            .map(|i| (0..cols).map(|j| g(i + 2, n + j) / g(1, n + j)).collect())
            .collect();

        for k in 1..=order {
            for j in 0..(cols - k) {
                let d = psi_g[k - 1][j + 1] - psi_g[k - 1][j];
                psi_s[j] = (psi_s[j + 1] - psi_s[j]) / d;
                psi_one[j] = (psi_one[j + 1] - psi_one[j]) / d;
                for i in k..order {
                    psi_g[i][j] = (psi_g[i][j + 1] - psi_g[i][j]) / d;
                }
            }
        }

        psi_s[0] / psi_one[0]
    }
}
