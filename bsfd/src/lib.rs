//! # bsfd
//!
//! Finite difference pricing of vanilla European and American options under
//! Black-Scholes.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bsfd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bsfd = "0.1"
//! ```
//!
//! ```rust
//! use bsfd::pricingengines::price_implicit;
//!
//! // S=50, T=1, K=50, r=10%, q=0, σ=25%, 100 time steps, 40 space steps
//! let r = price_implicit(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 40, true, false)?;
//! assert!(r.fair_value > 7.0 && r.fair_value < 9.0);
//! assert!(r.stability_norm <= 1.0);
//! # Ok::<(), bsfd::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use bsfd_core as core;

/// Mathematical utilities: arrays, matrices, interpolation, normal distribution.
pub use bsfd_math as math;

/// Vanilla option contracts and the pricing-engine interface.
pub use bsfd_instruments as instruments;

/// Numerical methods (finite difference grid and schemes).
pub use bsfd_methods as methods;

/// Pricing engines.
pub use bsfd_pricingengines as pricingengines;
