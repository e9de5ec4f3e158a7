//! The `(N + 1) × (M + 1)` option value buffer.

use bsfd_core::{Real, Size};

/// Option values on the grid, row `i` = time index, column `j` = space index.
///
/// Row `N` is maturity and row 0 is the present. Stored row-major so each
/// time row is a contiguous slice.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueGrid {
    time_steps: Size,
    space_steps: Size,
    data: Vec<Real>,
}

impl ValueGrid {
    /// Zero-filled grid for `N` time steps and `M` space steps.
    pub fn zeros(time_steps: Size, space_steps: Size) -> Self {
        Self {
            time_steps,
            space_steps,
            data: vec![0.0; (time_steps + 1) * (space_steps + 1)],
        }
    }

    /// `N`.
    pub fn time_steps(&self) -> Size {
        self.time_steps
    }

    /// `M`.
    pub fn space_steps(&self) -> Size {
        self.space_steps
    }

    #[inline]
    fn offset(&self, i: Size, j: Size) -> usize {
        debug_assert!(i <= self.time_steps && j <= self.space_steps);
        i * (self.space_steps + 1) + j
    }

    /// Value at time row `i`, space column `j`.
    #[inline]
    pub fn get(&self, i: Size, j: Size) -> Real {
        self.data[self.offset(i, j)]
    }

    /// Overwrite the value at `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: Size, j: Size, value: Real) {
        let k = self.offset(i, j);
        self.data[k] = value;
    }

    /// Time row `i` (length `M + 1`).
    pub fn row(&self, i: Size) -> &[Real] {
        let start = self.offset(i, 0);
        &self.data[start..start + self.space_steps + 1]
    }

    /// Mutable time row `i`.
    pub fn row_mut(&mut self, i: Size) -> &mut [Real] {
        let start = self.offset(i, 0);
        let width = self.space_steps + 1;
        &mut self.data[start..start + width]
    }

    /// Space column `j` (length `N + 1`), top to bottom.
    pub fn column(&self, j: Size) -> Vec<Real> {
        (0..=self.time_steps).map(|i| self.get(i, j)).collect()
    }

    /// First non-finite entry, if any.
    pub fn find_non_finite(&self) -> Option<(Size, Size, Real)> {
        let width = self.space_steps + 1;
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|k| (k / width, k % width, self.data[k]))
    }
}
