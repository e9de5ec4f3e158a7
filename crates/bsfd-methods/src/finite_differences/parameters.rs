//! Contract and market inputs of one pricing call.

use bsfd_core::{ensure, errors::Result, Rate, Real, Size, Time, Volatility};
use bsfd_instruments::{ExerciseType, OptionType, PlainVanillaPayoff};

/// Everything a single finite difference pricing call needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingParameters {
    /// Spot price of the underlying, `S_0`.
    pub spot: Real,
    /// Time to maturity in years, `T`.
    pub maturity: Time,
    /// Strike, `K`.
    pub strike: Real,
    /// Continuously compounded risk-free rate, `r`.
    pub risk_free_rate: Rate,
    /// Continuous dividend yield, `q`.
    pub dividend_yield: Rate,
    /// Black-Scholes volatility, `σ`.
    pub volatility: Volatility,
    /// Number of time steps, `N`.
    pub time_steps: Size,
    /// Number of space steps, `M`.
    pub space_steps: Size,
    /// Call or put.
    pub option_type: OptionType,
    /// European or American.
    pub exercise: ExerciseType,
}

impl PricingParameters {
    /// Check every input before any grid is built.
    ///
    /// # Errors
    /// `Error::InvalidParameter` on a non-finite number, non-positive
    /// maturity, strike, volatility, or step count.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("spot", self.spot),
            ("maturity", self.maturity),
            ("strike", self.strike),
            ("risk-free rate", self.risk_free_rate),
            ("dividend yield", self.dividend_yield),
            ("volatility", self.volatility),
        ];
        for (name, value) in named {
            ensure!(value.is_finite(), "{name} must be finite, got {value}");
        }
        ensure!(
            self.time_steps > 0,
            "number of time steps must be positive, got {}",
            self.time_steps
        );
        ensure!(
            self.space_steps > 0,
            "number of space steps must be positive, got {}",
            self.space_steps
        );
        ensure!(self.maturity > 0.0, "maturity must be positive, got {}", self.maturity);
        ensure!(self.strike > 0.0, "strike must be positive, got {}", self.strike);
        ensure!(
            self.volatility > 0.0,
            "volatility must be positive, got {}",
            self.volatility
        );
        Ok(())
    }

    /// The vanilla payoff, used for the terminal row and the exercise floor.
    pub fn payoff(&self) -> PlainVanillaPayoff {
        PlainVanillaPayoff::new(self.option_type, self.strike)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// S=50, K=50, T=1, r=10%, q=0, σ=25%, N=100, M=40 European call.
    pub(crate) fn reference_call() -> PricingParameters {
        PricingParameters {
            spot: 50.0,
            maturity: 1.0,
            strike: 50.0,
            risk_free_rate: 0.1,
            dividend_yield: 0.0,
            volatility: 0.25,
            time_steps: 100,
            space_steps: 40,
            option_type: OptionType::Call,
            exercise: ExerciseType::European,
        }
    }

    #[test]
    fn reference_parameters_are_valid() {
        assert!(reference_call().validate().is_ok());
    }

    #[test]
    fn rejects_zero_steps() {
        let p = PricingParameters {
            time_steps: 0,
            ..reference_call()
        };
        assert!(p.validate().unwrap_err().is_invalid_parameter());
        let p = PricingParameters {
            space_steps: 0,
            ..reference_call()
        };
        assert!(p.validate().unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn rejects_non_positive_terms() {
        for p in [
            PricingParameters {
                strike: 0.0,
                ..reference_call()
            },
            PricingParameters {
                maturity: -1.0,
                ..reference_call()
            },
            PricingParameters {
                volatility: 0.0,
                ..reference_call()
            },
        ] {
            assert!(p.validate().unwrap_err().is_invalid_parameter(), "{p:?}");
        }
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let p = PricingParameters {
            risk_free_rate: Real::NAN,
            ..reference_call()
        };
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("risk-free rate"));
        let p = PricingParameters {
            spot: Real::INFINITY,
            ..reference_call()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn negative_rates_are_accepted() {
        let p = PricingParameters {
            risk_free_rate: -0.01,
            dividend_yield: -0.02,
            ..reference_call()
        };
        assert!(p.validate().is_ok());
    }
}
