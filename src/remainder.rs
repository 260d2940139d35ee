//! Remainder-estimate kernels for the Levin-type transforms and numerator
//! strategies for the rho-type transforms.
//!
//! A kernel models the tail behavior of a series and is injected into an
//! algorithm at construction as a plain value — the algorithms are generic
//! over the kernel type, so variant selection is static dispatch with no
//! indirection. Kernels are pure: their output depends only on `(n, j)` and
//! the series.
//!
//! # Kernels
//!
//! Each kernel returns the *reciprocal* weight 1/ω(n+j) that multiplies a
//! column of the Levin-type rational combination:
//!
//! | Kernel | 1/ω(n+j) |
//! |--------|----------|
//! | [`TKernel`] | 1/a(n+j) |
//! | [`UKernel`] | 1/((β+n)·a(n+j+1)) |
//! | [`VKernel`] | (a(n+j+1)−a(n+j)) / (a(n+j+1)·a(n+j)) |
//! | [`TTildeKernel`] | 1/a(n+j+1) |
//! | [`VTildeKernel`] | (a(n+j)−a(n+j+1)) / (a(n+j)·a(n+j+1)) |

use crate::series::Series;
use crate::traits::FloatScalar;

/// A remainder-estimate kernel for Levin-type transforms.
///
/// Implementations return the reciprocal remainder weight `1/ω(n+j)`.
/// A vanishing series term makes the weight infinite; per the crate's
/// degeneracy policy the non-finite value propagates to the caller.
pub trait RemainderEstimate<T: FloatScalar> {
    /// Reciprocal remainder weight for column `j` of a window based at `n`.
    fn estimate<S: Series<T> + ?Sized>(&self, n: usize, j: usize, series: &S) -> T;
}

/// t-variant: 1/ω = 1/a(n+j) (term remainder model).
#[derive(Debug, Clone, Copy, Default)]
pub struct TKernel;

impl<T: FloatScalar> RemainderEstimate<T> for TKernel {
    fn estimate<S: Series<T> + ?Sized>(&self, n: usize, j: usize, series: &S) -> T {
        series.term(n + j).recip()
    }
}

/// u-variant: 1/ω = 1/((β+n)·a(n+j+1)).
///
/// The shift parameter β > 0 is fixed at construction; β = 1 is the
/// conventional choice.
#[derive(Debug, Clone, Copy)]
pub struct UKernel<T> {
    beta: T,
}

impl<T: FloatScalar> UKernel<T> {
    /// Kernel with the given shift parameter β.
    pub fn new(beta: T) -> Self {
        Self { beta }
    }
}

impl<T: FloatScalar> Default for UKernel<T> {
    fn default() -> Self {
        Self { beta: T::one() }
    }
}

impl<T: FloatScalar> RemainderEstimate<T> for UKernel<T> {
    fn estimate<S: Series<T> + ?Sized>(&self, n: usize, j: usize, series: &S) -> T {
        ((self.beta + T::from(n).unwrap()) * series.term(n + j + 1)).recip()
    }
}

/// v-variant: 1/ω = (a(n+j+1)−a(n+j)) / (a(n+j+1)·a(n+j))
/// (modified Aitken remainder model).
#[derive(Debug, Clone, Copy, Default)]
pub struct VKernel;

impl<T: FloatScalar> RemainderEstimate<T> for VKernel {
    fn estimate<S: Series<T> + ?Sized>(&self, n: usize, j: usize, series: &S) -> T {
        let a1 = series.term(n + j);
        let a2 = series.term(n + j + 1);
        (a2 - a1) / (a2 * a1)
    }
}

/// Shifted t-variant: 1/ω = 1/a(n+j+1).
#[derive(Debug, Clone, Copy, Default)]
pub struct TTildeKernel;

impl<T: FloatScalar> RemainderEstimate<T> for TTildeKernel {
    fn estimate<S: Series<T> + ?Sized>(&self, n: usize, j: usize, series: &S) -> T {
        series.term(n + j + 1).recip()
    }
}

/// Shifted v-variant: 1/ω = (a(n+j)−a(n+j+1)) / (a(n+j)·a(n+j+1)).
#[derive(Debug, Clone, Copy, Default)]
pub struct VTildeKernel;

impl<T: FloatScalar> RemainderEstimate<T> for VTildeKernel {
    fn estimate<S: Series<T> + ?Sized>(&self, n: usize, j: usize, series: &S) -> T {
        let a1 = series.term(n + j);
        let a2 = series.term(n + j + 1);
        (a1 - a2) / (a1 * a2)
    }
}

/// Numerator strategy for the rho-type Wynn recurrence.
///
/// The classical rho algorithm places `x(n+k) − x(n)` over the reciprocal
/// difference; the generalized variants replace it with expressions in the
/// transformation order and the γ/ρ shift constants.
pub trait RhoNumerator<T: FloatScalar> {
    /// Numerator of the rho recurrence step at `(n, order)`.
    fn numerator<S: Series<T> + ?Sized>(
        &self,
        n: usize,
        order: usize,
        series: &S,
        gamma: T,
        rho: T,
    ) -> T;
}

/// Classical rho numerator: a(n+order) − a(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicNumerator;

impl<T: FloatScalar> RhoNumerator<T> for ClassicNumerator {
    fn numerator<S: Series<T> + ?Sized>(
        &self,
        n: usize,
        order: usize,
        series: &S,
        _gamma: T,
        _rho: T,
    ) -> T {
        series.term(n + order) - series.term(n)
    }
}

/// Generalized numerator: order − γ − 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralizedNumerator;

impl<T: FloatScalar> RhoNumerator<T> for GeneralizedNumerator {
    fn numerator<S: Series<T> + ?Sized>(
        &self,
        _n: usize,
        order: usize,
        _series: &S,
        gamma: T,
        _rho: T,
    ) -> T {
        T::from(order).unwrap() - gamma - T::one()
    }
}

/// γ-ρ numerator: −γ + ⌊order/2⌋/ρ + (order mod 2).
#[derive(Debug, Clone, Copy, Default)]
pub struct GammaRhoNumerator;

impl<T: FloatScalar> RhoNumerator<T> for GammaRhoNumerator {
    fn numerator<S: Series<T> + ?Sized>(
        &self,
        _n: usize,
        order: usize,
        _series: &S,
        gamma: T,
        rho: T,
    ) -> T {
        -gamma + T::from(order / 2).unwrap() / rho + T::from(order & 1).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::ExpSeries;

    #[test]
    fn t_kernel_is_reciprocal_term() {
        let s = ExpSeries::new(0.5_f64).unwrap();
        let k = TKernel;
        assert!((k.estimate(3, 2, &s) - s.term(5).recip()).abs() < 1e-14);
    }

    #[test]
    fn u_kernel_applies_shift() {
        let s = ExpSeries::new(0.5_f64).unwrap();
        let k = UKernel::new(2.0);
        let expected = 1.0 / ((2.0 + 3.0) * s.term(6));
        assert!((k.estimate(3, 2, &s) - expected).abs() < 1e-10);
    }

    #[test]
    fn v_kernels_are_mirrored() {
        let s = ExpSeries::new(0.5_f64).unwrap();
        let v = VKernel;
        let vt = VTildeKernel;
        let a = v.estimate(2, 1, &s);
        let b = vt.estimate(2, 1, &s);
        assert!((a + b).abs() < 1e-14);
    }

    #[test]
    fn classic_numerator_is_term_difference() {
        let s = ExpSeries::new(0.5_f64).unwrap();
        let n = ClassicNumerator;
        let got = n.numerator(2, 4, &s, 1.0, 0.0);
        assert!((got - (s.term(6) - s.term(2))).abs() < 1e-14);
    }

    #[test]
    fn generalized_and_gamma_rho_numerators() {
        let s = ExpSeries::new(0.5_f64).unwrap();
        let g = GeneralizedNumerator;
        assert!((g.numerator(0, 4, &s, 1.0, 0.0) - 2.0).abs() < 1e-14);

        let gr = GammaRhoNumerator;
        // −2 + (6/2)/1.5 + 0 = 0
        assert!(gr.numerator(0, 6, &s, 2.0, 1.5).abs() < 1e-14);
        // odd order adds 1
        assert!((gr.numerator(0, 7, &s, 2.0, 1.5) - 1.0).abs() < 1e-14);
    }
}
