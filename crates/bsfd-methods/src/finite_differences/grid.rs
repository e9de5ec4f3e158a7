//! Uniform price–time grid.

use super::parameters::PricingParameters;
use bsfd_core::{ensure, errors::Result, Real, Size, Time};

/// Multiple of the strike placed at the upper edge of the price domain.
pub const DOMAIN_STRIKE_MULTIPLE: Real = 2.0;

/// Discretisation metadata of the price–time domain.
///
/// Space: `[0, 2K]` with `M + 1` nodes spaced `dS = S_max / M`.
/// Time: `[0, T]` with `N + 1` nodes spaced `dt = T / N`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    s_min: Real,
    s_max: Real,
    ds: Real,
    dt: Time,
    time_steps: Size,
    space_steps: Size,
}

impl Grid {
    /// Build the grid for a strike, a maturity, and the step counts.
    ///
    /// # Errors
    /// `Error::InvalidParameter` if `N`, `M`, `K`, or `T` is not positive.
    pub fn new(strike: Real, maturity: Time, time_steps: Size, space_steps: Size) -> Result<Self> {
        ensure!(time_steps > 0, "number of time steps must be positive");
        ensure!(space_steps > 0, "number of space steps must be positive");
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");

        let s_max = DOMAIN_STRIKE_MULTIPLE * strike;
        Ok(Self {
            s_min: 0.0,
            s_max,
            ds: s_max / space_steps as Real,
            dt: maturity / time_steps as Real,
            time_steps,
            space_steps,
        })
    }

    /// Build the grid from a full parameter set.
    pub fn from_parameters(params: &PricingParameters) -> Result<Self> {
        Self::new(
            params.strike,
            params.maturity,
            params.time_steps,
            params.space_steps,
        )
    }

    /// Lower edge of the price domain (always 0).
    pub fn s_min(&self) -> Real {
        self.s_min
    }

    /// Upper edge of the price domain.
    pub fn s_max(&self) -> Real {
        self.s_max
    }

    /// Price spacing.
    pub fn ds(&self) -> Real {
        self.ds
    }

    /// Time spacing.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// `N`.
    pub fn time_steps(&self) -> Size {
        self.time_steps
    }

    /// `M`.
    pub fn space_steps(&self) -> Size {
        self.space_steps
    }

    /// Underlying price at space index `j`.
    #[inline]
    pub fn price_at(&self, j: Size) -> Real {
        self.s_min + j as Real * self.ds
    }

    /// All `M + 1` node prices.
    pub fn prices(&self) -> Vec<Real> {
        (0..=self.space_steps).map(|j| self.price_at(j)).collect()
    }

    /// Time remaining to maturity at time row `i`, `(N − i)·dt`.
    #[inline]
    pub fn time_to_maturity(&self, i: Size) -> Time {
        (self.time_steps - i) as Real * self.dt
    }

    /// The middle space index `M / 2`.
    pub fn mid_index(&self) -> Size {
        self.space_steps / 2
    }
}
