use alloc::vec::Vec;

use super::Accelerator;
use crate::series::Series;
use crate::traits::FloatScalar;

/// Richardson extrapolation over `order + 1` consecutive partial sums.
///
/// Seeds a triangular table with `S(n), …, S(n+order)` and eliminates
/// successive error components with the weighted-difference ladder
/// `Rₖ⁽ʲ⁾ = (4ᵏ·Rₖ₋₁⁽ʲ⁺¹⁾ − Rₖ₋₁⁽ʲ⁾)/(4ᵏ − 1)`,
/// returning the top corner `R_order⁽⁰⁾`. Exact when the partial-sum error
/// decays like 4⁻ʲ; effective whenever it is dominated by a short geometric
/// ladder in powers of 1/4.
///
/// Cost: `order + 1` partial-sum evaluations plus an O(order²) table fill.
#[derive(Debug, Clone, Copy)]
pub struct Richardson<'a, S> {
    series: &'a S,
}

impl<'a, S> Richardson<'a, S> {
    /// Bind the transform to a series.
    pub fn new(series: &'a S) -> Self {
        Self { series }
    }
}

impl<'a, T: FloatScalar, S: Series<T>> Accelerator<T> for Richardson<'a, S> {
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }

        let mut table: Vec<T> = (0..=order).map(|j| self.series.partial_sum(n + j)).collect();

        let four = T::from(4).unwrap();
        let mut pow4 = T::one();
        for k in 1..=order {
            pow4 = pow4 * four;
            // ascending j overwrites entry j before entry j+1 is read,
            // so each read still sees level k−1
            for j in 0..=(order - k) {
                table[j] = (pow4 * table[j + 1] - table[j]) / (pow4 - T::one());
            }
        }

        table[0]
    }
}
