//! Standard normal distribution, delegating to the `statrs` crate.

use bsfd_core::Real;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

fn standard_normal() -> Normal {
    Normal::standard()
}

/// The standard normal probability density function φ(x).
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    standard_normal().pdf(x)
}

/// The standard normal cumulative distribution function Φ(x).
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    standard_normal().cdf(x)
}
