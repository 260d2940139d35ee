//! Series providers: the term sources that the acceleration transforms
//! consume.
//!
//! A provider is immutable after construction. Its constructor validates the
//! argument against the series' convergence domain and fails with
//! [`SeriesError`] instead of ever existing in an invalid state. Partial
//! sums are recomputed on demand — nothing is cached between calls, so a
//! provider can be shared by reference across any number of accelerators
//! and threads.
//!
//! # Providers
//!
//! | Provider | Series | Domain | Limit |
//! |----------|--------|--------|-------|
//! | [`ExpSeries`] | Σ xⁿ/n! | finite x | eˣ |
//! | [`CosSeries`] | Σ (−1)ⁿ x²ⁿ/(2n)! | finite x | cos x |
//! | [`SinSeries`] | Σ (−1)ⁿ x²ⁿ⁺¹/(2n+1)! | finite x | sin x |
//! | [`CoshSeries`] | Σ x²ⁿ/(2n)! | finite x | cosh x |
//! | [`ArcsinSeries`] | Σ (2n−1)!!/(2n)!! · x²ⁿ⁺¹/(2n+1) | \|x\| ≤ 1 | asin x |
//! | [`ArctanSeries`] | 4·Σ (−1)ⁿ x²ⁿ⁺¹/(2n+1) | \|x\| ≤ 1 | 4·atan x |
//! | [`Ln1PlusXSeries`] | Σ (−1)ⁿ⁺¹ xⁿ/n | −1 < x ≤ 1 | ln(1+x) |
//! | [`GeometricSeries`] | Σ xⁿ | \|x\| < 1 | 1/(1−x) |
//! | [`ZetaSeries`] | Σ n⁻ˣ | x > 1 | — |
//! | [`ExpSquaredErfSeries`] | Σ x²ⁿ⁺¹/Γ(n+3/2) | finite x | eˣ²·erf x |
//! | [`BinomialSeries`] | Σ C(m,n) xⁿ | \|x\| < 1 | (1+x)ᵐ |
//!
//! # Example
//!
//! ```
//! use celeris::series::{ExpSeries, Series};
//!
//! let s = ExpSeries::new(1.0_f64).unwrap();
//! // S₃ = 1 + 1 + 1/2 + 1/6
//! assert!((s.partial_sum(3) - 8.0 / 3.0).abs() < 1e-14);
//! assert!((s.limit().unwrap() - 1.0_f64.exp()).abs() < 1e-14);
//! ```

mod arcsin;
mod arctan;
mod binomial_series;
mod erf_series;
mod exp;
mod geometric;
mod hyperbolic;
mod log;
mod trig;
mod zeta;

#[cfg(test)]
mod tests;

pub use arcsin::ArcsinSeries;
pub use arctan::ArctanSeries;
pub use binomial_series::BinomialSeries;
pub use erf_series::ExpSquaredErfSeries;
pub use exp::ExpSeries;
pub use geometric::GeometricSeries;
pub use hyperbolic::CoshSeries;
pub use log::Ln1PlusXSeries;
pub use trig::{CosSeries, SinSeries};
pub use zeta::ZetaSeries;

use crate::traits::FloatScalar;

/// Errors from series provider construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    /// The argument lies outside the series' convergence domain.
    OutsideDomain,
    /// The argument is NaN or infinite.
    NonFiniteArgument,
}

impl core::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SeriesError::OutsideDomain => {
                write!(f, "argument outside the series' convergence domain")
            }
            SeriesError::NonFiniteArgument => write!(f, "argument is not finite"),
        }
    }
}

/// A term source for acceleration transforms.
///
/// Implementors are read-only after construction; both methods are pure
/// functions of their index.
pub trait Series<T: FloatScalar> {
    /// The nth series term aₙ.
    fn term(&self, n: usize) -> T;

    /// Partial sum Sₙ = Σ_{i=0}^{n} aᵢ.
    ///
    /// The default recomputes terms on demand; transforms call this
    /// repeatedly for nearby indices and providers stay stateless.
    fn partial_sum(&self, n: usize) -> T {
        let mut s = self.term(0);
        for i in 1..=n {
            s = s + self.term(i);
        }
        s
    }

    /// Closed-form sum of the series, when one is known.
    fn limit(&self) -> Option<T> {
        None
    }

    /// Human-readable series name.
    fn name(&self) -> &'static str;
}

/// Reject NaN/infinite arguments; shared by every constructor.
fn check_finite<T: FloatScalar>(x: T) -> Result<(), SeriesError> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(SeriesError::NonFiniteArgument)
    }
}
