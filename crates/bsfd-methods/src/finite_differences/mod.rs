//! Finite difference pricing of vanilla options under Black-Scholes.
//!
//! The price domain `[0, 2K]` is split into `M` intervals and `[0, T]` into
//! `N` time steps. The terminal payoff is rolled back row by row with either
//! an explicit step (`V_i = A·V_{i+1} + k`) or an implicit one
//! (`V_i = A⁻¹·(V_{i+1} + k)`), and the fair value is read off row 0.
//!
//! # Overview
//!
//! * [`PricingParameters`]: contract and market inputs of one call
//! * [`Grid`]: uniform space/time discretisation
//! * [`Scheme`]: coefficient generation and stepping ([`ExplicitScheme`], [`ImplicitScheme`])
//! * [`LinearOperator`]: assembled tridiagonal matrix and its step operator
//! * [`BoundaryConditionPolicy`]: terminal row and edge columns
//! * [`BackwardInductionEngine`]: the time loop, with optional early exercise
//! * [`PdeSolver`]: ties the above together and extracts an [`FdmResult`]

/// Terminal and boundary conditions.
pub mod boundary;
/// Backward induction.
pub mod engine;
/// Space/time discretisation.
pub mod grid;
/// Coefficient bands and step operators.
pub mod operator;
/// Pricing inputs.
pub mod parameters;
/// Price extraction.
pub mod result;
/// Explicit and implicit schemes.
pub mod scheme;
/// Solver tuning knobs.
pub mod settings;
/// End-to-end solver.
pub mod solver;
/// Value grid storage.
pub mod value_grid;

pub use boundary::BoundaryConditionPolicy;
pub use engine::BackwardInductionEngine;
pub use grid::{Grid, DOMAIN_STRIKE_MULTIPLE};
pub use operator::{LinearOperator, TridiagonalOperator};
pub use parameters::PricingParameters;
pub use result::{FdmResult, ResultExtractor};
pub use scheme::{ExplicitScheme, ImplicitScheme, Scheme, SchemeKind};
pub use settings::{Extraction, SolverSettings, DEFAULT_INVERSION_TOLERANCE};
pub use solver::{solve_with, FdmSolution, PdeSolver};
pub use value_grid::ValueGrid;
