//! Backward induction over the time rows of the value grid.

use super::boundary::BoundaryConditionPolicy;
use super::grid::Grid;
use super::operator::{LinearOperator, TridiagonalOperator};
use super::scheme::Scheme;
use super::value_grid::ValueGrid;
use bsfd_core::{errors::Result, fail, Real};
use bsfd_math::Array;
use tracing::trace;

/// Steps the value grid from row `N − 1` down to row 0.
///
/// The unknown vector of each step spans columns `0..M`; only the interior
/// columns `1..M` are written back, so the boundary columns keep the values
/// set by [`BoundaryConditionPolicy`] (up to the exercise floor).
#[derive(Debug)]
pub struct BackwardInductionEngine<'a, S: Scheme> {
    scheme: &'a S,
    coefficients: &'a TridiagonalOperator,
    operator: &'a LinearOperator,
    exercise_floor: Option<Vec<Real>>,
}

impl<'a, S: Scheme> BackwardInductionEngine<'a, S> {
    /// European engine: no early-exercise projection.
    pub fn new(
        scheme: &'a S,
        coefficients: &'a TridiagonalOperator,
        operator: &'a LinearOperator,
    ) -> Self {
        Self {
            scheme,
            coefficients,
            operator,
            exercise_floor: None,
        }
    }

    /// Project every row onto `V ≥ intrinsic` after each step (American).
    pub fn with_exercise_floor(mut self, intrinsic: Vec<Real>) -> Self {
        self.exercise_floor = Some(intrinsic);
        self
    }

    /// Fill rows `N − 1, …, 0` of `values`.
    ///
    /// # Errors
    /// `Error::Numerical` if a non-finite value reached the grid.
    pub fn roll_back(&self, grid: &Grid, values: &mut ValueGrid) -> Result<()> {
        let n = grid.time_steps();
        let m = grid.space_steps();
        debug_assert_eq!(values.time_steps(), n);
        debug_assert_eq!(values.space_steps(), m);
        debug_assert_eq!(self.coefficients.size(), m);

        for i in (0..n).rev() {
            let next = values.row(i + 1);
            let correction = self
                .scheme
                .boundary_correction(self.coefficients, next[0], next[m]);
            let current = self
                .scheme
                .step(self.operator, &Array::from_slice(&next[..m]), &correction);

            let row = values.row_mut(i);
            row[1..m].copy_from_slice(&current.as_slice()[1..m]);

            if let Some(floor) = &self.exercise_floor {
                for (v, &intrinsic) in row.iter_mut().zip(floor.iter()) {
                    *v = v.max(intrinsic);
                }
            }
            trace!(row = i, mid = row[m / 2], "stepped");
        }

        if let Some((i, j, v)) = values.find_non_finite() {
            fail!("non-finite value {v} at grid node ({i}, {j})");
        }
        Ok(())
    }
}
