//! # celeris
//!
//! Series-acceleration algorithms in pure Rust, no-std compatible: given a
//! slowly (or divergently) convergent series, compute a better estimate of
//! its limit from a finite window of partial sums than the raw partial sum
//! itself, by exploiting the structure of the error term.
//!
//! ## Quick start
//!
//! ```
//! use celeris::accel::{Accelerator, WynnEpsilon};
//! use celeris::series::{ArctanSeries, Series};
//!
//! // Leibniz series for π — the raw partial sums crawl
//! let series = ArctanSeries::new(1.0_f64).unwrap();
//! let eps = WynnEpsilon::new(&series);
//!
//! let pi = core::f64::consts::PI;
//! let raw = (series.partial_sum(10) - pi).abs(); // ~0.09
//! let acc = (eps.estimate(10, 5) - pi).abs();    // ~1e-11
//! assert!(acc < raw * 1e-6);
//! ```
//!
//! ## Modules
//!
//! - [`series`] — term providers: the [`Series`](series::Series) trait plus
//!   a catalog of classical series (exponential, trigonometric, arcsin,
//!   Leibniz/arctan, Mercator log, geometric, zeta, binomial, …) with
//!   domain-validated constructors and known closed-form limits for
//!   reference.
//!
//! - [`accel`] — the transforms: Shanks/Aitken, Wynn epsilon and rho,
//!   Richardson, the Levin and Levin-Sidi families, Drummond, Weniger,
//!   Brezinski theta, Lubkin W, Chang-Wynn, and Ford-Sidi. All implement
//!   [`Accelerator`](accel::Accelerator): `estimate(n, order)` with order 0
//!   as the identity transform. Requires the `alloc` feature (included in
//!   `std`).
//!
//! - [`remainder`] — remainder-estimate kernels (t/u/v and the shifted
//!   variants) injected into the Levin-type transforms, and numerator
//!   strategies for Wynn's rho algorithm.
//!
//! - [`special`] — shared numeric helpers: factorials, binomial
//!   coefficients, Pochhammer symbols, and the error function.
//!
//! - [`traits`] — the [`Scalar`]/[`FloatScalar`] element-trait hierarchy;
//!   everything is generic over `T: FloatScalar` (`f32`, `f64`).
//!
//! ## Degeneracy policy
//!
//! Near-zero denominators inside a recurrence are informative degeneracies
//! of the method, not library errors: the non-finite value propagates to
//! the caller. Constructors, by contrast, validate eagerly — a series
//! provider outside its convergence domain or an accelerator with an
//! invalid parameter never exists.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc` | via std | Extrapolation tables (the `accel` module) |
//! | `libm`  | no      | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod accel;
pub mod remainder;
pub mod series;
pub mod special;
pub mod traits;

#[cfg(feature = "alloc")]
pub use accel::{AccelError, Accelerator};
pub use series::{Series, SeriesError};
pub use traits::{FloatScalar, Scalar};
