//! Piecewise-linear interpolation on a sorted abscissa.

use crate::comparison::close_enough;
use bsfd_core::{ensure, errors::Result, Real};

/// Linear interpolation.
///
/// `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`
///
/// Outside `[x_min, x_max]` the first/last segment is extended.
#[derive(Debug, Clone)]
pub struct LinearInterpolation<'a> {
    xs: &'a [Real],
    ys: &'a [Real],
}

impl<'a> LinearInterpolation<'a> {
    /// Construct a linear interpolation from sorted `xs` and corresponding `ys`.
    ///
    /// # Errors
    /// Returns an error if the slices have different lengths or fewer than 2 points.
    pub fn new(xs: &'a [Real], ys: &'a [Real]) -> Result<Self> {
        ensure!(xs.len() >= 2, "need at least 2 points for interpolation");
        ensure!(
            xs.len() == ys.len(),
            "xs and ys must have the same length ({} vs {})",
            xs.len(),
            ys.len()
        );
        Ok(Self { xs, ys })
    }

    /// Lower bound of the interpolation domain.
    pub fn x_min(&self) -> Real {
        self.xs[0]
    }

    /// Upper bound of the interpolation domain.
    pub fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    /// Return `true` if `x` is within the interpolation range.
    pub fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }

    /// Index `i` of the segment `[x[i], x[i+1]]` containing `x`.
    pub fn locate(&self, x: Real) -> usize {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return 0;
        }
        if x >= self.xs[n - 1] {
            return n - 2;
        }
        // first index with xs[idx] > x, minus one
        self.xs.partition_point(|&xi| xi <= x) - 1
    }

    /// Evaluate the interpolation at `x`.
    ///
    /// A query that coincides with a node (to a few ulps) returns the node
    /// value exactly.
    pub fn value(&self, x: Real) -> Real {
        let i = self.locate(x);
        if close_enough(x, self.xs[i], 4) {
            return self.ys[i];
        }
        if close_enough(x, self.xs[i + 1], 4) {
            return self.ys[i + 1];
        }
        let dx = self.xs[i + 1] - self.xs[i];
        if dx.abs() < Real::EPSILON {
            return self.ys[i];
        }
        self.ys[i] + (x - self.xs[i]) * (self.ys[i + 1] - self.ys[i]) / dx
    }
}
