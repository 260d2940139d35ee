use alloc::vec::Vec;

use super::{Accelerator, AccelError};
use crate::remainder::RemainderEstimate;
use crate::series::Series;
use crate::special::{alternating_sign, binomial};
use crate::traits::FloatScalar;

/// Levin's transformation with a constructor-injected remainder kernel.
///
/// Direct mode evaluates the weighted rational combination
///
/// ```text
/// T(n,k) = [Σⱼ (−1)ʲ C(k,j) ((β+n+j)/(β+n+k))^{k−1} S(n+j)/ω(n+j)] /
///          [Σⱼ (−1)ʲ C(k,j) ((β+n+j)/(β+n+k))^{k−1} 1/ω(n+j)]
/// ```
///
/// in O(order) per call. Recursive mode (`recursive = true`) computes the
/// same quantity through the three-term numerator/denominator recurrence,
/// trading an O(order²) in-place sweep for better behavior when the direct
/// weights grow ill-conditioned. Both modes agree to floating-point
/// rounding.
///
/// # Example
///
/// ```
/// use celeris::accel::{Accelerator, Levin};
/// use celeris::remainder::UKernel;
/// use celeris::series::Ln1PlusXSeries;
///
/// // alternating harmonic series: Levin-u is devastatingly effective
/// let s = Ln1PlusXSeries::new(1.0_f64).unwrap();
/// let levin = Levin::new(&s, UKernel::default(), 1.0, false).unwrap();
/// let ln2 = 2.0_f64.ln();
/// assert!((levin.estimate(1, 8) - ln2).abs() < 1e-7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Levin<'a, T, S, R> {
    series: &'a S,
    kernel: R,
    beta: T,
    recursive: bool,
}

impl<'a, T: FloatScalar, S, R> Levin<'a, T, S, R> {
    /// Bind the transform to a series with the given remainder kernel,
    /// shift parameter β > 0, and computation mode.
    pub fn new(series: &'a S, kernel: R, beta: T, recursive: bool) -> Result<Self, AccelError> {
        if !(beta > T::zero()) {
            return Err(AccelError::InvalidParameter);
        }
        Ok(Self { series, kernel, beta, recursive })
    }
}

impl<'a, T, S, R> Levin<'a, T, S, R>
where
    T: FloatScalar,
    S: Series<T>,
    R: RemainderEstimate<T>,
{
    fn direct(&self, n: usize, order: usize) -> T {
        let mut num = T::zero();
        let mut den = T::zero();
        let k1 = order as i32 - 1;
        let base = self.beta + T::from(n + order).unwrap();

        for j in 0..=order {
            let mut w = alternating_sign::<T>(j) * binomial(T::from(order).unwrap(), j);
            w = w * ((self.beta + T::from(n + j).unwrap()).powi(k1) / base.powi(k1));
            w = w * self.kernel.estimate(n, j, self.series);

            num = num + w * self.series.partial_sum(n + j);
            den = den + w;
        }

        num / den
    }

    fn recurrent(&self, n: usize, order: usize) -> T {
        let mut den: Vec<T> = (0..=order)
            .map(|i| self.kernel.estimate(n, i, self.series))
            .collect();
        let mut num: Vec<T> = (0..=order)
            .map(|i| self.series.partial_sum(n + i) * den[i])
            .collect();

        for k in 1..=order {
            for j in 0..=(order - k) {
                let b = self.beta + T::from(n + j).unwrap();
                let scale = b * (b + T::from(k - 1).unwrap()).powi(k as i32 - 2)
                    / (b + T::from(k).unwrap()).powi(k as i32 - 1);
                den[j] = den[j + 1] - scale * den[j];
                num[j] = num[j + 1] - scale * num[j];
            }
        }

        num[0] / den[0]
    }
}

impl<'a, T, S, R> Accelerator<T> for Levin<'a, T, S, R>
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
