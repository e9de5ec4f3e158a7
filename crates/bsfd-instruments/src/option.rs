//! Vanilla option instrument.

use crate::exercise::ExerciseType;
use crate::instrument::{PricingEngine, PricingResults};
use crate::payoff::{OptionType, PlainVanillaPayoff};
use bsfd_core::{errors::Result, Real, Time};

/// Arguments needed for pricing a one-asset vanilla option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOptionArguments {
    /// The payoff.
    pub payoff: PlainVanillaPayoff,
    /// The exercise style.
    pub exercise: ExerciseType,
    /// Time to expiry in years.
    pub maturity: Time,
}

/// A plain vanilla option on a single underlying asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption {
    payoff: PlainVanillaPayoff,
    exercise: ExerciseType,
    maturity: Time,
}

impl VanillaOption {
    /// Create a new vanilla option.
    pub fn new(payoff: PlainVanillaPayoff, exercise: ExerciseType, maturity: Time) -> Self {
        Self {
            payoff,
            exercise,
            maturity,
        }
    }

    /// Convenience: create a European call/put.
    pub fn european(option_type: OptionType, strike: Real, maturity: Time) -> Self {
        Self::new(
            PlainVanillaPayoff::new(option_type, strike),
            ExerciseType::European,
            maturity,
        )
    }

    /// Convenience: create an American call/put.
    pub fn american(option_type: OptionType, strike: Real, maturity: Time) -> Self {
        Self::new(
            PlainVanillaPayoff::new(option_type, strike),
            ExerciseType::American,
            maturity,
        )
    }

    /// The strike price.
    pub fn strike(&self) -> Real {
        self.payoff.strike
    }

    /// The option type (call/put).
    pub fn option_type(&self) -> OptionType {
        self.payoff.option_type
    }

    /// The payoff.
    pub fn payoff(&self) -> &PlainVanillaPayoff {
        &self.payoff
    }

    /// The exercise style.
    pub fn exercise(&self) -> ExerciseType {
        self.exercise
    }

    /// Time to expiry in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Get the arguments for a pricing engine.
    pub fn arguments(&self) -> VanillaOptionArguments {
        VanillaOptionArguments {
            payoff: self.payoff,
            exercise: self.exercise,
            maturity: self.maturity,
        }
    }

    /// Price this option using the given engine.
    pub fn price(
        &self,
        engine: &dyn PricingEngine<VanillaOptionArguments>,
    ) -> Result<PricingResults> {
        engine.calculate(&self.arguments())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct IntrinsicEngine {
        spot: Real,
    }

    impl PricingEngine<VanillaOptionArguments> for IntrinsicEngine {
        fn calculate(&self, args: &VanillaOptionArguments) -> Result<PricingResults> {
            Ok(PricingResults::from_npv(args.payoff.value(self.spot)))
        }
    }

    #[test]
    fn european_call_construction() {
        let opt = VanillaOption::european(OptionType::Call, 100.0, 0.5);
        assert_eq!(opt.strike(), 100.0);
        assert_eq!(opt.option_type(), OptionType::Call);
        assert_eq!(opt.exercise(), ExerciseType::European);
        assert_eq!(opt.maturity(), 0.5);
    }

    #[test]
    fn american_put_arguments() {
        let opt = VanillaOption::american(OptionType::Put, 40.0, 1.0);
        let args = opt.arguments();
        assert_eq!(args.exercise, ExerciseType::American);
        assert_eq!(args.payoff.strike, 40.0);
        assert_eq!(args.maturity, 1.0);
    }

    #[test]
    fn price_delegates_to_engine() {
        let opt = VanillaOption::european(OptionType::Put, 40.0, 1.0);
        let res = opt.price(&IntrinsicEngine { spot: 35.0 }).unwrap();
        assert_eq!(res.npv, 5.0);
    }
}
