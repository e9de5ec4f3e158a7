//! Time-stepping schemes.
//!
//! A scheme owns the whole sign convention of its discretisation: the
//! coefficient derivation, the boundary-correction vector, and the step
//! formula. The two are never mixed across schemes.

use super::grid::Grid;
use super::operator::{LinearOperator, TridiagonalOperator};
use super::settings::SolverSettings;
use bsfd_core::{errors::Error, errors::Result, Rate, Real, Volatility};
use bsfd_math::Array;
use std::fmt;
use std::str::FromStr;

// ─── Scheme selection ────────────────────────────────────────────────────────

/// Finite difference time-stepping scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Explicit, `V^{i} = A · V^{i+1} + k`. Cheap but conditionally stable.
    Explicit,
    /// Fully implicit, `V^{i} = A⁻¹ · (V^{i+1} + k)`. Unconditionally stable.
    Implicit,
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeKind::Explicit => write!(f, "explicit"),
            SchemeKind::Implicit => write!(f, "implicit"),
        }
    }
}

impl FromStr for SchemeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "explicit" => Ok(SchemeKind::Explicit),
            "implicit" => Ok(SchemeKind::Implicit),
            other => Err(Error::InvalidParameter(format!(
                "unknown scheme '{other}', expected 'explicit' or 'implicit'"
            ))),
        }
    }
}

// ─── Scheme capability ───────────────────────────────────────────────────────

/// What a time-stepping scheme contributes to the backward induction.
pub trait Scheme: fmt::Debug + Send + Sync {
    /// Tag of this scheme.
    fn kind(&self) -> SchemeKind;

    /// Per-node coefficients `a`, `b`, `c` for `j = 0..M`.
    fn coefficients(
        &self,
        grid: &Grid,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        volatility: Volatility,
    ) -> TridiagonalOperator;

    /// Build the step operator from the coefficients.
    fn operator(
        &self,
        coefficients: &TridiagonalOperator,
        settings: &SolverSettings,
    ) -> Result<LinearOperator>;

    /// Length-`M` vector injecting the known boundary values `lower`
    /// (column 0) and `upper` (column M) of the later time row.
    fn boundary_correction(
        &self,
        coefficients: &TridiagonalOperator,
        lower: Real,
        upper: Real,
    ) -> Array;

    /// Values at the earlier time row from the later row `next` and the
    /// boundary correction.
    fn step(&self, operator: &LinearOperator, next: &Array, correction: &Array) -> Array;
}

/// Diffusion, drift, and discount contributions at node `j`.
#[inline]
fn node_terms(j: usize, dt: Real, r: Rate, q: Rate, sigma: Volatility) -> (Real, Real, Real) {
    let j = j as Real;
    let diffusion = 0.5 * sigma * sigma * j * j * dt;
    let drift = 0.5 * (r - q) * j * dt;
    (diffusion, drift, r * dt)
}

fn correction_vector(size: usize, first: Real, last: Real) -> Array {
    let mut k = Array::zeros(size);
    k[0] += first;
    k[size - 1] += last;
    k
}

// ─── Explicit ────────────────────────────────────────────────────────────────

/// Explicit scheme: coefficients are normalised by `1 + r·dt` and applied
/// directly to the later time row.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitScheme;

impl Scheme for ExplicitScheme {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Explicit
    }

    fn coefficients(
        &self,
        grid: &Grid,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        volatility: Volatility,
    ) -> TridiagonalOperator {
        let m = grid.space_steps();
        let mut a = Vec::with_capacity(m);
        let mut b = Vec::with_capacity(m);
        let mut c = Vec::with_capacity(m);
        for j in 0..m {
            let (diffusion, drift, discount) =
                node_terms(j, grid.dt(), risk_free_rate, dividend_yield, volatility);
            let norm = 1.0 / (1.0 + discount);
            a.push((diffusion - drift) * norm);
            b.push((1.0 - 2.0 * diffusion) * norm);
            c.push((diffusion + drift) * norm);
        }
        TridiagonalOperator::new(a, b, c)
    }

    fn operator(
        &self,
        coefficients: &TridiagonalOperator,
        _settings: &SolverSettings,
    ) -> Result<LinearOperator> {
        Ok(LinearOperator::explicit(coefficients))
    }

    fn boundary_correction(
        &self,
        coefficients: &TridiagonalOperator,
        lower: Real,
        upper: Real,
    ) -> Array {
        let m = coefficients.size();
        correction_vector(
            m,
            coefficients.lower[0] * lower,
            coefficients.upper[m - 1] * upper,
        )
    }

    fn step(&self, operator: &LinearOperator, next: &Array, correction: &Array) -> Array {
        operator.apply(next) + correction.clone()
    }
}

// ─── Implicit ────────────────────────────────────────────────────────────────

/// Implicit scheme: unnormalised coefficients; the system is solved with
/// the cached inverse.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImplicitScheme;

impl Scheme for ImplicitScheme {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Implicit
    }

    fn coefficients(
        &self,
        grid: &Grid,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        volatility: Volatility,
    ) -> TridiagonalOperator {
        let m = grid.space_steps();
        let mut a = Vec::with_capacity(m);
        let mut b = Vec::with_capacity(m);
        let mut c = Vec::with_capacity(m);
        for j in 0..m {
            let (diffusion, drift, discount) =
                node_terms(j, grid.dt(), risk_free_rate, dividend_yield, volatility);
            a.push(drift - diffusion);
            b.push(1.0 + 2.0 * diffusion + discount);
            c.push(-drift - diffusion);
        }
        TridiagonalOperator::new(a, b, c)
    }

    fn operator(
        &self,
        coefficients: &TridiagonalOperator,
        settings: &SolverSettings,
    ) -> Result<LinearOperator> {
        LinearOperator::implicit(coefficients, settings.inversion_tolerance)
    }

    fn boundary_correction(
        &self,
        coefficients: &TridiagonalOperator,
        lower: Real,
        upper: Real,
    ) -> Array {
        let m = coefficients.size();
        correction_vector(
            m,
            -coefficients.lower[0] * lower,
            -coefficients.upper[m - 1] * upper,
        )
    }

    fn step(&self, operator: &LinearOperator, next: &Array, correction: &Array) -> Array {
        operator.apply(&(next + correction))
    }
}
