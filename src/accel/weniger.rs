use super::Accelerator;
use crate::series::Series;
use crate::special::{alternating_sign, binomial, pochhammer};
use crate::traits::FloatScalar;

/// Weniger's δ-transformation.
///
/// A Levin-type combination whose weights grow by rising factorials rather
/// than powers, with the remainder model fixed to the shifted term
/// `1/a(n+j+1)`:
///
/// ```text
/// δ(n,k) = [Σⱼ (−1)ʲ C(k,j) (1+n+j)_{k−1} S(n+j)/a(n+j+1)] /
///          [Σⱼ (−1)ʲ C(k,j) (1+n+j)_{k−1} 1/a(n+j+1)]
/// ```
///
/// Particularly strong on strictly alternating series, where the factorial
/// weight ladder tracks the remainder growth better than Levin's powers.
#[derive(Debug, Clone, Copy)]
pub struct WenigerDelta<'a, S> {
    series: &'a S,
}

impl<'a, S> WenigerDelta<'a, S> {
    /// Bind the transform to a series.
    pub fn new(series: &'a S) -> Self {
        Self { series }
    }
}

impl<'a, T: FloatScalar, S: Series<T>> Accelerator<T> for WenigerDelta<'a, S> {
    fn estimate(&self, n: usize, order: usize) -> T {
        if order == 0 {
            return self.series.partial_sum(n);
        }

        let mut num = T::zero();
        let mut den = T::zero();

        // (1+n+j)_{order−1}, advanced by (n+j+order)/(n+j+1) per column
        let mut coeff = pochhammer(T::from(1 + n).unwrap(), order - 1);
        let mut sum = self.series.partial_sum(n);

        for j in 0..=order {
            let mut w = alternating_sign::<T>(j) * binomial(T::from(order).unwrap(), j);
            w = w * coeff / self.series.term(n + j + 1);

            num = num + w * sum;
            den = den + w;

            coeff = coeff * T::from(n + j + order).unwrap() / T::from(n + j + 1).unwrap();
            sum = sum + self.series.term(n + j + 1);
        }

        num / den
    }
}
