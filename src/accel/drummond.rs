use alloc::vec::Vec;

use super::Accelerator;
use crate::remainder::RemainderEstimate;
use crate::series::Series;
use crate::special::{alternating_sign, binomial};
use crate::traits::FloatScalar;

/// Drummond's D-transformation.
///
/// The plainest member of the Levin-type family — binomial weights with no
/// shift ladder:
///
/// ```text
/// D(n,k) = [Σⱼ (−1)ʲ C(k,j) S(n+j)/ω(n+j)] / [Σⱼ (−1)ʲ C(k,j) 1/ω(n+j)]
/// ```
///
/// Recursive mode computes the identical quantity as a ratio of k-fold
/// forward differences of the weighted partial sums, which is how the
/// binomial sums factor. Effective on alternating series; the kernel
/// selects the remainder model as in [`Levin`](super::Levin).
#[derive(Debug, Clone, Copy)]
pub struct DrummondD<'a, S, R> {
    series: &'a S,
    kernel: R,
    recursive: bool,
}

impl<'a, S, R> DrummondD<'a, S, R> {
    /// Bind the transform to a series with the given remainder kernel and
    /// computation mode.
    pub fn new(series: &'a S, kernel: R, recursive: bool) -> Self {
        Self { series, kernel, recursive }
    }
}

impl<'a, S, R> DrummondD<'a, S, R> {
    fn direct<T>(&self, n: usize, order: usize) -> T
    where
        T: FloatScalar,
        S: Series<T>,
        R: RemainderEstimate<T>,
    {
        let mut num = T::zero();
        let mut den = T::zero();

        for j in 0..=order {
            let mut w = alternating_sign::<T>(j) * binomial(T::from(order).unwrap(), j);
            w = w * self.kernel.estimate(n, j, self.series);

            num = num + w * self.series.partial_sum(n + j);
            den = den + w;
        }

        num / den
    }

    fn recurrent<T>(&self, n: usize, order: usize) -> T
    where
        T: FloatScalar,
        S: Series<T>,
        R: RemainderEstimate<T>,
    {
        let mut den: Vec<T> = (0..=order)
            .map(|i| self.kernel.estimate(n, i, self.series))
            .collect();
        let mut num: Vec<T> = (0..=order)
            .map(|i| self.series.partial_sum(n + i) * den[i])
            .collect();

        for k in 1..=order {
            for j in 0..=(order - k) {
                den[j] = den[j + 1] - den[j];
                num[j] = num[j + 1] - num[j];
            }
        }

        num[0] / den[0]
    }
}

impl<'a, T, S, R> Accelerator<T> for DrummondD<'a, S, R>
where
    T: FloatScalar,
    S: Series<T>,
    R: RemainderEstimate<T>,
{
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }
        if self.recursive {
            self.recurrent(n, order)
        } else {
            self.direct(n, order)
        }
    }
}
