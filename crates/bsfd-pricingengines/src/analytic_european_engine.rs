//! Analytic European option engine (Black-Scholes-Merton).
//!
//! Closed-form reference prices for European vanilla options, used to sanity
//! check the finite difference engines.

use bsfd_core::{ensure, errors::Result, Rate, Real, Time, Volatility};
use bsfd_instruments::{OptionType, PricingEngine, PricingResults, VanillaOptionArguments};
use bsfd_math::normal_cdf;

/// Analytic pricing engine for European vanilla options.
///
/// Implements the Black-Scholes-Merton closed-form solution:
///
/// $$C = S e^{-qT} N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S e^{-qT} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$
#[derive(Debug, Clone, Copy)]
pub struct AnalyticEuropeanEngine {
    spot: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
}

impl AnalyticEuropeanEngine {
    /// Create a new engine on flat market data.
    pub fn new(spot: Real, risk_free_rate: Rate, dividend_yield: Rate, volatility: Volatility) -> Self {
        Self {
            spot,
            risk_free_rate,
            dividend_yield,
            volatility,
        }
    }
}

/// Black-Scholes-Merton price of a European option.
pub fn black_scholes_merton(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    time_to_expiry: Time,
) -> Real {
    let phi = option_type.sign();
    let t = time_to_expiry;

    if t <= 0.0 {
        return (phi * (spot - strike)).max(0.0);
    }

    let r = risk_free_rate;
    let q = dividend_yield;
    let sigma = volatility;
    let std_dev = sigma * t.sqrt();
    let df_r = (-r * t).exp();
    let df_q = (-q * t).exp();
    let fwd = spot * ((r - q) * t).exp();

    let (d1, d2) = if std_dev > 1e-15 {
        let d1 = ((spot / strike).ln() + (r - q + 0.5 * sigma * sigma) * t) / std_dev;
        (d1, d1 - std_dev)
    } else {
        let big = if fwd > strike { 1e15 } else { -1e15 };
        (big, big)
    };

    phi * (spot * df_q * normal_cdf(phi * d1) - strike * df_r * normal_cdf(phi * d2))
}

impl PricingEngine<VanillaOptionArguments> for AnalyticEuropeanEngine {
    fn calculate(&self, args: &VanillaOptionArguments) -> Result<PricingResults> {
        ensure!(
            !args.exercise.allows_early_exercise(),
            "analytic engine prices European exercise only, got {}",
            args.exercise
        );
        let price = black_scholes_merton(
            args.payoff.option_type,
            self.spot,
            args.payoff.strike,
            self.risk_free_rate,
            self.dividend_yield,
            self.volatility,
            args.maturity,
        );
        Ok(PricingResults::from_npv(price))
    }
}
