//! # bsfd-methods
//!
//! Numerical methods for pricing vanilla options on a finite difference grid
//! over the Black-Scholes PDE.
//!
//! # Modules
//!
//! * [`finite_differences`]: grid, explicit/implicit schemes, boundary
//!   conditions, backward induction and the end-to-end solver

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Finite difference methods: grid, schemes, backward induction, solver.
pub mod finite_differences;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use finite_differences::{
    solve_with, BoundaryConditionPolicy, ExplicitScheme, Extraction, FdmResult, FdmSolution,
    Grid, ImplicitScheme, LinearOperator, PdeSolver, PricingParameters, Scheme, SchemeKind,
    SolverSettings, TridiagonalOperator, ValueGrid,
};
