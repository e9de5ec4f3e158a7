//! Reading the fair value off the present-time row.

use super::grid::Grid;
use super::parameters::PricingParameters;
use super::settings::Extraction;
use super::value_grid::ValueGrid;
use bsfd_core::{ensure, errors::Result, Price, Real};
use bsfd_math::LinearInterpolation;

/// Output of one pricing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FdmResult {
    /// Option fair value.
    pub fair_value: Price,
    /// Infinity norm of the step operator (`A` explicit, `A⁻¹` implicit).
    pub stability_norm: Real,
}

/// Extracts the price from row 0 according to an [`Extraction`] rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultExtractor {
    extraction: Extraction,
}

impl ResultExtractor {
    /// Extractor for the given rule.
    pub fn new(extraction: Extraction) -> Self {
        Self { extraction }
    }

    /// The extraction rule.
    pub fn extraction(&self) -> Extraction {
        self.extraction
    }

    /// Reject parameters the rule cannot serve, before any grid is built.
    ///
    /// Mid-grid extraction needs an even `M`; interpolation needs the spot
    /// inside `[0, 2K]`.
    pub fn check(&self, params: &PricingParameters) -> Result<()> {
        match self.extraction {
            Extraction::MidGrid => ensure!(
                params.space_steps % 2 == 0,
                "mid-grid extraction needs an even number of space steps, got {}",
                params.space_steps
            ),
            Extraction::Interpolated => {
                let s_max = super::grid::DOMAIN_STRIKE_MULTIPLE * params.strike;
                ensure!(
                    (0.0..=s_max).contains(&params.spot),
                    "spot {} lies outside the price domain [0, {s_max}]",
                    params.spot
                );
            }
        }
        Ok(())
    }

    /// Read the fair value from row 0 of `values`.
    pub fn extract(
        &self,
        grid: &Grid,
        values: &ValueGrid,
        spot: Real,
        stability_norm: Real,
    ) -> Result<FdmResult> {
        let present = values.row(0);
        let fair_value = match self.extraction {
            Extraction::MidGrid => present[grid.mid_index()],
            Extraction::Interpolated => {
                let prices = grid.prices();
                LinearInterpolation::new(&prices, present)?.value(spot)
            }
        };
        Ok(FdmResult {
            fair_value,
            stability_norm,
        })
    }
}
