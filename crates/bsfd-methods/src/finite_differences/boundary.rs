//! Terminal and boundary conditions of the value grid.

use super::grid::Grid;
use super::value_grid::ValueGrid;
use bsfd_core::{DiscountFactor, Rate, Real, Size};
use bsfd_instruments::{OptionType, PlainVanillaPayoff};

/// Fills row `N` with the payoff and columns 0 and `M` with the asymptotic
/// deep in/out-of-the-money values for every earlier time row.
///
/// At maturity the payoff takes precedence over the boundary formulas, so
/// row `N` is exactly the discretised payoff at every node.
///
/// * Call: `V(0) = 0`, `V(S_max) = S_max · e^{−r(N−i)dt}`.
/// * Put: `V(0) = K · e^{−r(N−i)dt}`, `V(S_max) = 0`.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryConditionPolicy {
    payoff: PlainVanillaPayoff,
    risk_free_rate: Rate,
}

impl BoundaryConditionPolicy {
    /// Policy for a vanilla payoff discounted at `risk_free_rate`.
    pub fn new(payoff: PlainVanillaPayoff, risk_free_rate: Rate) -> Self {
        Self {
            payoff,
            risk_free_rate,
        }
    }

    fn discount(&self, grid: &Grid, i: Size) -> DiscountFactor {
        (-self.risk_free_rate * grid.time_to_maturity(i)).exp()
    }

    /// Value at `S = 0` on time row `i`.
    pub fn lower(&self, grid: &Grid, i: Size) -> Real {
        match self.payoff.option_type {
            OptionType::Call => 0.0,
            OptionType::Put => self.payoff.strike * self.discount(grid, i),
        }
    }

    /// Value at `S = S_max` on time row `i`.
    pub fn upper(&self, grid: &Grid, i: Size) -> Real {
        match self.payoff.option_type {
            OptionType::Call => grid.s_max() * self.discount(grid, i),
            OptionType::Put => 0.0,
        }
    }

    /// Intrinsic value at every node, `max(φ(j·dS − K), 0)`.
    pub fn intrinsic_values(&self, grid: &Grid) -> Vec<Real> {
        grid.prices().into_iter().map(|s| self.payoff.value(s)).collect()
    }

    /// A value grid with the terminal row and both boundary columns set.
    pub fn initialize(&self, grid: &Grid) -> ValueGrid {
        let n = grid.time_steps();
        let m = grid.space_steps();
        let mut values = ValueGrid::zeros(n, m);

        for i in 0..n {
            values.set(i, 0, self.lower(grid, i));
            values.set(i, m, self.upper(grid, i));
        }
        values
            .row_mut(n)
            .copy_from_slice(&self.intrinsic_values(grid));
        values
    }
}
