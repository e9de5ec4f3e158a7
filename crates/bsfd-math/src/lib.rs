//! # bsfd-math
//!
//! Mathematical utilities: matrix/array newtypes (over nalgebra), linear
//! interpolation, float comparisons, and the standard normal distribution (via statrs).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional real vector.
pub mod array;

/// Floating-point comparisons.
pub mod comparison;

/// Standard normal distribution.
pub mod distributions;

/// Piecewise-linear interpolation.
pub mod interpolation;

/// Dense real matrix.
pub mod matrix;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::{close, close_enough};
pub use distributions::{normal_cdf, normal_pdf};
pub use interpolation::LinearInterpolation;
pub use matrix::Matrix;
