//! Tridiagonal coefficient bands and the dense step operator built from them.

use super::scheme::SchemeKind;
use bsfd_core::{ensure_post, errors::Result, fail, Real};
use bsfd_math::{Array, Matrix};
use tracing::debug;

// ─── Coefficient bands ───────────────────────────────────────────────────────

/// The three per-node coefficient vectors `a`, `b`, `c` of length `M`.
///
/// Row `j` of the discretised equation couples nodes `j − 1`, `j`, `j + 1`
/// with weights `a[j]`, `b[j]`, `c[j]`. `a[0]` and `c[M − 1]` fall outside
/// the `M × M` operator and are folded into the boundary correction.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator {
    /// Lower band `a` (index 0 only feeds the boundary correction).
    pub lower: Vec<Real>,
    /// Main diagonal `b`.
    pub diag: Vec<Real>,
    /// Upper band `c` (last index only feeds the boundary correction).
    pub upper: Vec<Real>,
}

impl TridiagonalOperator {
    /// Wrap three equally sized bands.
    ///
    /// # Panics
    /// If the bands differ in length.
    pub fn new(lower: Vec<Real>, diag: Vec<Real>, upper: Vec<Real>) -> Self {
        assert_eq!(lower.len(), diag.len(), "lower band length");
        assert_eq!(upper.len(), diag.len(), "upper band length");
        Self { lower, diag, upper }
    }

    /// Size `M` (number of rows/columns).
    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Dense `M × M` matrix: diagonal `b`, sub-diagonal `a[1..]`,
    /// super-diagonal `c[..M−1]`.
    pub fn to_matrix(&self) -> Matrix {
        let n = self.size();
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            if i > 0 {
                m[(i, i - 1)] = self.lower[i];
            }
            m[(i, i)] = self.diag[i];
            if i + 1 < n {
                m[(i, i + 1)] = self.upper[i];
            }
        }
        m
    }
}

// ─── Step operator ───────────────────────────────────────────────────────────

/// The assembled operator and the matrix applied at every backward step.
///
/// Explicit mode steps with `A` itself; implicit mode steps with the dense
/// inverse `B = A⁻¹`, computed once here and reused for all `N` steps.
#[derive(Debug, Clone)]
pub struct LinearOperator {
    kind: SchemeKind,
    assembled: Matrix,
    step: Matrix,
    stability_norm: Real,
    inversion_residual: Option<Real>,
}

impl LinearOperator {
    /// Use the assembled matrix directly as the step operator.
    pub fn explicit(bands: &TridiagonalOperator) -> Self {
        let assembled = bands.to_matrix();
        let stability_norm = assembled.norm_inf();
        debug!(size = bands.size(), stability_norm, "assembled explicit operator");
        Self {
            kind: SchemeKind::Explicit,
            step: assembled.clone(),
            assembled,
            stability_norm,
            inversion_residual: None,
        }
    }

    /// Invert the assembled matrix once and step with the inverse.
    ///
    /// # Errors
    /// `Error::Numerical` if the matrix is singular, if the inverse has
    /// non-finite entries, or if `max |B·A − I|` exceeds `tolerance`.
    pub fn implicit(bands: &TridiagonalOperator, tolerance: Real) -> Result<Self> {
        let assembled = bands.to_matrix();
        let step = match assembled.try_inverse() {
            Some(inv) => inv,
            None => fail!("implicit operator of size {} is singular", bands.size()),
        };
        ensure_post!(step.is_finite(), "inverse of the implicit operator is not finite");

        let residual = (&step * &assembled).max_deviation_from_identity();
        ensure_post!(
            residual <= tolerance,
            "implicit operator is ill-conditioned: max |B·A − I| = {residual:e} exceeds {tolerance:e}"
        );

        let stability_norm = step.norm_inf();
        debug!(
            size = bands.size(),
            stability_norm,
            residual,
            "inverted implicit operator"
        );
        Ok(Self {
            kind: SchemeKind::Implicit,
            assembled,
            step,
            stability_norm,
            inversion_residual: Some(residual),
        })
    }

    /// Which scheme this operator belongs to.
    pub fn kind(&self) -> SchemeKind {
        self.kind
    }

    /// The tridiagonal matrix `A`.
    pub fn assembled(&self) -> &Matrix {
        &self.assembled
    }

    /// The matrix applied at each step (`A` or `A⁻¹`).
    pub fn step_matrix(&self) -> &Matrix {
        &self.step
    }

    /// Infinity norm of the step matrix.
    pub fn stability_norm(&self) -> Real {
        self.stability_norm
    }

    /// `max |B·A − I|` for the implicit scheme, `None` for explicit.
    pub fn inversion_residual(&self) -> Option<Real> {
        self.inversion_residual
    }

    /// Apply the step matrix to `v`.
    pub fn apply(&self, v: &Array) -> Array {
        self.step.mul_vec(v)
    }
}
