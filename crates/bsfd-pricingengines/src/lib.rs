//! # bsfd-pricingengines
//!
//! Pricing engines for vanilla options under Black-Scholes.
//!
//! ## Engines
//!
//! - [`FdBlackScholesVanillaEngine`]: finite difference grid, explicit or implicit,
//!   European or American exercise
//! - [`AnalyticEuropeanEngine`]: Black-Scholes-Merton closed form for European options
//!
//! The pure functions [`price`], [`price_explicit`] and [`price_implicit`]
//! price straight from market and grid inputs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod fd_black_scholes_vanilla_engine;

pub use analytic_european_engine::{black_scholes_merton, AnalyticEuropeanEngine};
pub use fd_black_scholes_vanilla_engine::{
    price, price_explicit, price_implicit, FdBlackScholesVanillaEngine, STABILITY_NORM,
};
