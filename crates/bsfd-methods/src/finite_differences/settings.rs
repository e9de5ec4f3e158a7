//! Numerical knobs of the solver.

use bsfd_core::{ensure, errors::Result, Real};

/// Default bound on `max |B·A − I|` for the implicit inverse.
pub const DEFAULT_INVERSION_TOLERANCE: Real = 1e-8;

/// Where the fair value is read from the present-time row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Extraction {
    /// Node `M / 2`, i.e. `S = K`, regardless of the spot. Exact only when
    /// the spot equals the strike.
    #[default]
    MidGrid,
    /// Linear interpolation between the two nodes bracketing the spot.
    Interpolated,
}

/// Solver configuration shared by both schemes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverSettings {
    /// Largest accepted `max |B·A − I|` after inverting the implicit operator.
    pub inversion_tolerance: Real,
    /// Price extraction rule.
    pub extraction: Extraction,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            inversion_tolerance: DEFAULT_INVERSION_TOLERANCE,
            extraction: Extraction::MidGrid,
        }
    }
}

impl SolverSettings {
    /// Settings with interpolated extraction.
    pub fn interpolated() -> Self {
        Self {
            extraction: Extraction::Interpolated,
            ..Self::default()
        }
    }

    /// # Errors
    /// `Error::InvalidParameter` if the tolerance is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.inversion_tolerance.is_finite() && self.inversion_tolerance >= 0.0,
            "inversion tolerance must be a non-negative finite number, got {}",
            self.inversion_tolerance
        );
        Ok(())
    }
}
