//! Finite difference Black-Scholes engine for vanilla options.
//!
//! Two ways in: the pure functions [`price`], [`price_explicit`] and
//! [`price_implicit`], which take the raw market and grid inputs, and
//! [`FdBlackScholesVanillaEngine`], which prices a
//! [`VanillaOption`](bsfd_instruments::VanillaOption) through the
//! [`PricingEngine`] interface.

use bsfd_core::{errors::Result, Rate, Real, Size, Time, Volatility};
use bsfd_instruments::{
    ExerciseType, OptionType, PricingEngine, PricingResults, VanillaOptionArguments,
};
use bsfd_methods::{solve_with, FdmResult, PricingParameters, SchemeKind, SolverSettings};
use tracing::debug;

/// Key of the stability diagnostic in [`PricingResults::additional_results`].
pub const STABILITY_NORM: &str = "stability_norm";

/// Price a vanilla option on an `N × M` grid with the given scheme and
/// default solver settings.
///
/// The fair value is read at the centre column of the grid, which sits at
/// the strike; `spot` only takes part in validation.
///
/// # Errors
/// `Error::InvalidParameter` for non-finite inputs, non-positive `T`, `K`,
/// `σ`, `N` or `M`, or odd `M`; `Error::Numerical` if the implicit operator
/// cannot be inverted reliably.
#[allow(clippy::too_many_arguments)]
pub fn price(
    spot: Real,
    maturity: Time,
    strike: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    time_steps: Size,
    space_steps: Size,
    is_call: bool,
    is_american: bool,
    scheme: SchemeKind,
) -> Result<FdmResult> {
    let params = PricingParameters {
        spot,
        maturity,
        strike,
        risk_free_rate,
        dividend_yield,
        volatility,
        time_steps,
        space_steps,
        option_type: OptionType::from_is_call(is_call),
        exercise: ExerciseType::from_is_american(is_american),
    };
    solve_with(scheme, &params, SolverSettings::default()).map(|s| s.result)
}

/// [`price`] with the explicit scheme.
#[allow(clippy::too_many_arguments)]
pub fn price_explicit(
    spot: Real,
    maturity: Time,
    strike: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    time_steps: Size,
    space_steps: Size,
    is_call: bool,
    is_american: bool,
) -> Result<FdmResult> {
    price(
        spot,
        maturity,
        strike,
        risk_free_rate,
        dividend_yield,
        volatility,
        time_steps,
        space_steps,
        is_call,
        is_american,
        SchemeKind::Explicit,
    )
}

/// [`price`] with the implicit scheme.
#[allow(clippy::too_many_arguments)]
pub fn price_implicit(
    spot: Real,
    maturity: Time,
    strike: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    time_steps: Size,
    space_steps: Size,
    is_call: bool,
    is_american: bool,
) -> Result<FdmResult> {
    price(
        spot,
        maturity,
        strike,
        risk_free_rate,
        dividend_yield,
        volatility,
        time_steps,
        space_steps,
        is_call,
        is_american,
        SchemeKind::Implicit,
    )
}

/// Finite difference engine for European and American vanilla options on
/// flat market data.
///
/// The NPV is the grid fair value; the infinity norm of the step operator
/// is reported under [`STABILITY_NORM`].
#[derive(Debug, Clone, Copy)]
pub struct FdBlackScholesVanillaEngine {
    spot: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    time_steps: Size,
    space_steps: Size,
    scheme: SchemeKind,
    settings: SolverSettings,
}

impl FdBlackScholesVanillaEngine {
    /// Implicit engine with default settings.
    pub fn new(
        spot: Real,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        volatility: Volatility,
        time_steps: Size,
        space_steps: Size,
    ) -> Self {
        Self {
            spot,
            risk_free_rate,
            dividend_yield,
            volatility,
            time_steps,
            space_steps,
            scheme: SchemeKind::Implicit,
            settings: SolverSettings::default(),
        }
    }

    /// Use another time-stepping scheme.
    pub fn with_scheme(mut self, scheme: SchemeKind) -> Self {
        self.scheme = scheme;
        self
    }

    /// Use other solver settings.
    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The time-stepping scheme.
    pub fn scheme(&self) -> SchemeKind {
        self.scheme
    }

    /// Grid inputs for one contract.
    pub fn parameters(&self, args: &VanillaOptionArguments) -> PricingParameters {
        PricingParameters {
            spot: self.spot,
            maturity: args.maturity,
            strike: args.payoff.strike,
            risk_free_rate: self.risk_free_rate,
            dividend_yield: self.dividend_yield,
            volatility: self.volatility,
            time_steps: self.time_steps,
            space_steps: self.space_steps,
            option_type: args.payoff.option_type,
            exercise: args.exercise,
        }
    }
}

impl PricingEngine<VanillaOptionArguments> for FdBlackScholesVanillaEngine {
    fn calculate(&self, args: &VanillaOptionArguments) -> Result<PricingResults> {
        debug!(payoff = %args.payoff, exercise = %args.exercise, scheme = %self.scheme, "fd engine");
        let result = solve_with(self.scheme, &self.parameters(args), self.settings)?.result;
        Ok(PricingResults::from_npv(result.fair_value)
            .with_result(STABILITY_NORM, result.stability_norm))
    }
}
