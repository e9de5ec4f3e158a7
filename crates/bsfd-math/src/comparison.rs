//! Floating-point comparison helpers.

use bsfd_core::Real;

/// Absolute tolerance used when no other is given.
pub const EPSILON: Real = 1e-10;

/// `|a − b| ≤ epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// `|a − b|` within `n` machine epsilons of `max(|a|, |b|)`.
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let tolerance = a.abs().max(b.abs()) * Real::EPSILON * Real::from(n);
    (a - b).abs() <= tolerance
}
