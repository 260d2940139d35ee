use alloc::vec::Vec;

use super::{Accelerator, AccelError};
use crate::remainder::{RemainderEstimate, TKernel, UKernel, VKernel};
use crate::series::Series;
use crate::special::{alternating_sign, binomial, pochhammer};
use crate::traits::FloatScalar;

/// Levin-Sidi S-transformation, generic over the remainder kernel.
///
/// The S-transformation replaces Levin's power weights with Pochhammer
/// ratios:
///
/// ```text
/// S(n,k) = [Σⱼ (−1)ʲ C(k,j) (β+n+j)_{k−1}/(β+n+k)_{k−1} S(n+j)/ω(n+j)] /
///          [Σⱼ (−1)ʲ C(k,j) (β+n+j)_{k−1}/(β+n+k)_{k−1} 1/ω(n+j)]
/// ```
///
/// The three classical variants differ only in the injected kernel; use
/// the [`LevinSidiT`], [`LevinSidiU`], [`LevinSidiV`] aliases. Recursive
/// mode evaluates the same transform through its numerator/denominator
/// recurrence and agrees with direct mode to floating-point rounding.
#[derive(Debug, Clone, Copy)]
pub struct LevinSidiS<'a, T, S, R> {
    series: &'a S,
    kernel: R,
    beta: T,
    recursive: bool,
}

/// S-transformation with the t kernel.
pub type LevinSidiT<'a, T, S> = LevinSidiS<'a, T, S, TKernel>;
/// S-transformation with the u kernel.
pub type LevinSidiU<'a, T, S> = LevinSidiS<'a, T, S, UKernel<T>>;
/// S-transformation with the v kernel.
pub type LevinSidiV<'a, T, S> = LevinSidiS<'a, T, S, VKernel>;

impl<'a, T: FloatScalar, S, R> LevinSidiS<'a, T, S, R> {
    /// Bind the transform to a series with the given remainder kernel,
    /// shift parameter β > 0, and computation mode.
    pub fn new(series: &'a S, kernel: R, beta: T, recursive: bool) -> Result<Self, AccelError> {
        if !(beta > T::zero()) {
            return Err(AccelError::InvalidParameter);
        }
        Ok(Self { series, kernel, beta, recursive })
    }
}

impl<'a, T, S, R> LevinSidiS<'a, T, S, R>
where
    T: FloatScalar,
    S: Series<T>,
    R: RemainderEstimate<T>,
{
    fn direct(&self, n: usize, order: usize) -> T {
        let mut num = T::zero();
        let mut den = T::zero();
        let bn = self.beta + T::from(n).unwrap();
        let down = pochhammer(bn + T::from(order).unwrap(), order - 1);

        for j in 0..=order {
            let mut w = alternating_sign::<T>(j) * binomial(T::from(order).unwrap(), j);
            w = w * pochhammer(bn + T::from(j).unwrap(), order - 1) / down;
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

        let one = T::one();
        let two = T::from(2).unwrap();
        for k in 1..=order {
            let kt = T::from(k).unwrap();
            for j in 0..=(order - k) {
                let b = self.beta + T::from(n + j).unwrap();
                let scale = ((b + kt - one) * (b + kt - two))
                    / ((b + two * kt - two) * (b + two * kt - two - one));
                den[j] = den[j + 1] - scale * den[j];
                num[j] = num[j + 1] - scale * num[j];
            }
        }

        num[0] / den[0]
    }
}

impl<'a, T, S, R> Accelerator<T> for LevinSidiS<'a, T, S, R>
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

/// Levin-Sidi M-transformation.
///
/// A factorial variant effective on series of linear or factorial
/// convergence. The weight system uses the Pochhammer ratio ladder in the
/// shift parameter γ, which must satisfy `γ ≥ order − 1`:
///
/// ```text
/// M(n,k) = [Σⱼ (−1)ʲ C(k,j) (k−j)/(j+1) · Pⱼ(γ) · S(n+j)/ω(n+j)] /
///          [Σⱼ (−1)ʲ C(k,j) (k−j)/(j+1) · Pⱼ(γ) · 1/ω(n+j)]
/// ```
///
/// where `Pⱼ(γ)` is the ratio `(γ+n+2−k)_{k−1}/(γ+n+2)_{k−1}` advanced by
/// `(γ+n+1+j)/(γ+n−k+j)` per column.
#[derive(Debug, Clone, Copy)]
pub struct LevinSidiM<'a, T, S, R> {
    series: &'a S,
    kernel: R,
    gamma: T,
}

impl<'a, T: FloatScalar, S, R> LevinSidiM<'a, T, S, R> {
    /// Bind the transform to a series with the given remainder kernel and
    /// shift parameter γ (finite; conventionally 10).
    pub fn new(series: &'a S, kernel: R, gamma: T) -> Result<Self, AccelError> {
        if !gamma.is_finite() {
            return Err(AccelError::InvalidParameter);
        }
        Ok(Self { series, kernel, gamma })
    }
}

impl<'a, T, S, R> Accelerator<T> for LevinSidiM<'a, T, S, R>
where
    T: FloatScalar,
    S: Series<T>,
    R: RemainderEstimate<T>,
{
    /// # Panics
    ///
    /// Panics unless `γ ≥ order − 1`.
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }
        assert!(
            self.gamma >= T::from(order - 1).unwrap(),
            "levin-sidi M: gamma must be >= order - 1"
        );

        let one = T::one();
        let kt = T::from(order).unwrap();
        let gn = self.gamma + T::from(n).unwrap();

        // (γ+n+2−k)_{k−1} / (γ+n+2)_{k−1}, advanced per column below
        let mut ratio = pochhammer(gn + T::from(2).unwrap() - kt, order - 1)
            / pochhammer(gn + T::from(2).unwrap(), order - 1);
        let up_step = gn + one; // numerator offset of the per-column advance
        let down_step = gn - kt; // denominator offset of the per-column advance

        let mut num = T::zero();
        let mut den = T::zero();
        let mut sum = self.series.partial_sum(n);

        for j in 0..=order {
            let jt = T::from(j).unwrap();
            let mut w = alternating_sign::<T>(j) * binomial(kt, j) * (kt - jt);
            w = w * ratio / (jt + one);
            w = w * self.kernel.estimate(n, j, self.series);

            num = num + w * sum;
            den = den + w;

            ratio = ratio * (up_step + jt) / (down_step + jt);
            sum = sum + self.series.term(n + j + 1);
        }

        num / den
    }
}
