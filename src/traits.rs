use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can appear as series elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point series elements.
///
/// Required by everything that divides, extracts roots, or tests
/// finiteness — which is to say, by every transform in this crate.
/// Satisfied by `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
