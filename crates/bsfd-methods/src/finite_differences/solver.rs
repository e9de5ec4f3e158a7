//! One pricing call, end to end.

use super::boundary::BoundaryConditionPolicy;
use super::engine::BackwardInductionEngine;
use super::grid::Grid;
use super::operator::{LinearOperator, TridiagonalOperator};
use super::parameters::PricingParameters;
use super::result::{FdmResult, ResultExtractor};
use super::scheme::{ExplicitScheme, ImplicitScheme, Scheme, SchemeKind};
use super::settings::SolverSettings;
use super::value_grid::ValueGrid;
use bsfd_core::errors::Result;
use tracing::{debug, debug_span, info, warn};

/// Everything a pricing call produced, for callers that want to inspect
/// the grid as well as the price.
#[derive(Debug, Clone)]
pub struct FdmSolution {
    /// Discretisation metadata.
    pub grid: Grid,
    /// Coefficient vectors `a`, `b`, `c`.
    pub coefficients: TridiagonalOperator,
    /// Assembled and step operators.
    pub operator: LinearOperator,
    /// The fully rolled-back value grid.
    pub values: ValueGrid,
    /// Fair value and stability diagnostic.
    pub result: FdmResult,
}

/// Finite difference solver for the Black-Scholes PDE, generic over the
/// time-stepping scheme.
///
/// Solves `∂V/∂t + ½σ²S²·∂²V/∂S² + (r−q)S·∂V/∂S − rV = 0` backward in time
/// from the terminal payoff on a uniform grid over `[0, 2K] × [0, T]`.
#[derive(Debug, Clone)]
pub struct PdeSolver<S: Scheme> {
    scheme: S,
    settings: SolverSettings,
}

impl<S: Scheme> PdeSolver<S> {
    /// Create a solver with explicit settings.
    pub fn new(scheme: S, settings: SolverSettings) -> Self {
        Self { scheme, settings }
    }

    /// The scheme.
    pub fn scheme(&self) -> &S {
        &self.scheme
    }

    /// The settings.
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Price and keep every intermediate artefact.
    ///
    /// # Errors
    /// `Error::InvalidParameter` before any computation if the inputs or the
    /// settings are rejected; `Error::Numerical` if the operator cannot be
    /// inverted or the grid ends up with non-finite values.
    pub fn solve(&self, params: &PricingParameters) -> Result<FdmSolution> {
        let kind = self.scheme.kind();
        let span = debug_span!(
            "fdm_price",
            scheme = %kind,
            n = params.time_steps,
            m = params.space_steps
        );
        let _enter = span.enter();

        params.validate()?;
        self.settings.validate()?;
        let extractor = ResultExtractor::new(self.settings.extraction);
        extractor.check(params)?;

        let grid = Grid::from_parameters(params)?;
        debug!(s_max = grid.s_max(), ds = grid.ds(), dt = grid.dt(), "built grid");

        let coefficients = self.scheme.coefficients(
            &grid,
            params.risk_free_rate,
            params.dividend_yield,
            params.volatility,
        );
        let operator = self.scheme.operator(&coefficients, &self.settings)?;
        if kind == SchemeKind::Explicit && operator.stability_norm() > 1.0 {
            warn!(
                stability_norm = operator.stability_norm(),
                "explicit operator norm exceeds 1; errors may be amplified across steps"
            );
        }

        let policy = BoundaryConditionPolicy::new(params.payoff(), params.risk_free_rate);
        let mut values = policy.initialize(&grid);

        let mut engine = BackwardInductionEngine::new(&self.scheme, &coefficients, &operator);
        if params.exercise.allows_early_exercise() {
            engine = engine.with_exercise_floor(policy.intrinsic_values(&grid));
        }
        engine.roll_back(&grid, &mut values)?;

        let result = extractor.extract(&grid, &values, params.spot, operator.stability_norm())?;
        info!(
            fair_value = result.fair_value,
            stability_norm = result.stability_norm,
            option_type = %params.option_type,
            exercise = %params.exercise,
            "priced"
        );

        Ok(FdmSolution {
            grid,
            coefficients,
            operator,
            values,
            result,
        })
    }

    /// Price only.
    pub fn price(&self, params: &PricingParameters) -> Result<FdmResult> {
        self.solve(params).map(|s| s.result)
    }
}

/// Solve with a scheme chosen at run time.
pub fn solve_with(
    kind: SchemeKind,
    params: &PricingParameters,
    settings: SolverSettings,
) -> Result<FdmSolution> {
    match kind {
        SchemeKind::Explicit => PdeSolver::new(ExplicitScheme, settings).solve(params),
        SchemeKind::Implicit => PdeSolver::new(ImplicitScheme, settings).solve(params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finite_differences::parameters::tests::reference_call;
    use crate::finite_differences::settings::Extraction;
    use approx::assert_abs_diff_eq;
    use bsfd_instruments::{ExerciseType, OptionType};

    #[test]
    fn implicit_reference_call() {
        let r = PdeSolver::new(ImplicitScheme, SolverSettings::default())
            .price(&reference_call())
            .unwrap();
        assert_abs_diff_eq!(r.fair_value, 7.9759, epsilon = 1e-3);
        assert_abs_diff_eq!(r.stability_norm, 0.99938, epsilon = 1e-4);
    }

    #[test]
    fn explicit_reference_call() {
        let r = PdeSolver::new(ExplicitScheme, SolverSettings::default())
            .price(&reference_call())
            .unwrap();
        assert_abs_diff_eq!(r.fair_value, 7.9412, epsilon = 1e-3);
        assert_abs_diff_eq!(r.stability_norm, 0.99938, epsilon = 1e-4);
    }

    #[test]
    fn reference_puts() {
        let put = PricingParameters {
            option_type: OptionType::Put,
            ..reference_call()
        };
        let american = PricingParameters {
            exercise: ExerciseType::American,
            ..put
        };
        let s = SolverSettings::default();
        let eu = solve_with(SchemeKind::Implicit, &put, s).unwrap().result;
        let am = solve_with(SchemeKind::Implicit, &american, s).unwrap().result;
        assert_abs_diff_eq!(eu.fair_value, 2.6997, epsilon = 1e-3);
        assert_abs_diff_eq!(am.fair_value, 3.2298, epsilon = 1e-3);
        let eu = solve_with(SchemeKind::Explicit, &put, s).unwrap().result;
        let am = solve_with(SchemeKind::Explicit, &american, s).unwrap().result;
        assert_abs_diff_eq!(eu.fair_value, 2.7092, epsilon = 1e-3);
        assert_abs_diff_eq!(am.fair_value, 3.2514, epsilon = 1e-3);
    }

    #[test]
    fn solution_exposes_inverse_round_trip() {
        let sol = solve_with(SchemeKind::Implicit, &reference_call(), SolverSettings::default())
            .unwrap();
        let prod = sol.operator.step_matrix() * sol.operator.assembled();
        assert!(prod.max_deviation_from_identity() < 1e-8);
        assert_eq!(sol.coefficients.size(), 40);
        assert_eq!(sol.values.time_steps(), 100);
    }

    #[test]
    fn interpolated_extraction_matches_mid_grid_at_the_strike() {
        let params = reference_call();
        let mid = solve_with(SchemeKind::Implicit, &params, SolverSettings::default()).unwrap();
        let interp =
            solve_with(SchemeKind::Implicit, &params, SolverSettings::interpolated()).unwrap();
        assert_abs_diff_eq!(
            mid.result.fair_value,
            interp.result.fair_value,
            epsilon = 1e-12
        );
        // off-strike spot moves the interpolated price but not the mid-grid one
        let itm = PricingParameters {
            spot: 56.25,
            ..params
        };
        let mid_itm = solve_with(SchemeKind::Implicit, &itm, SolverSettings::default()).unwrap();
        let interp_itm =
            solve_with(SchemeKind::Implicit, &itm, SolverSettings::interpolated()).unwrap();
        assert_eq!(mid_itm.result.fair_value, mid.result.fair_value);
        assert!(interp_itm.result.fair_value > mid.result.fair_value);
        assert_eq!(
            ResultExtractor::new(Extraction::Interpolated).extraction(),
            Extraction::Interpolated
        );
    }

    #[test]
    fn singular_operator_aborts_the_call() {
        // b[0] = 1 + r·dt = 0 makes the first row of A vanish
        let params = PricingParameters {
            risk_free_rate: -1.0,
            time_steps: 1,
            space_steps: 10,
            ..reference_call()
        };
        let err = solve_with(SchemeKind::Implicit, &params, SolverSettings::default()).unwrap_err();
        assert!(err.is_numerical());
    }

    #[test]
    fn zero_tolerance_rejects_any_inversion_residual() {
        let settings = SolverSettings {
            inversion_tolerance: 0.0,
            ..SolverSettings::default()
        };
        let err = solve_with(SchemeKind::Implicit, &reference_call(), settings).unwrap_err();
        assert!(err.is_numerical());
        assert!(err.to_string().contains("ill-conditioned"));
        // explicit never inverts, so the tolerance does not apply
        assert!(solve_with(SchemeKind::Explicit, &reference_call(), settings).is_ok());
    }

    #[test]
    fn invalid_inputs_fail_fast() {
        let params = PricingParameters {
            strike: -50.0,
            ..reference_call()
        };
        assert!(solve_with(SchemeKind::Implicit, &params, SolverSettings::default())
            .unwrap_err()
            .is_invalid_parameter());
        let odd = PricingParameters {
            space_steps: 39,
            ..reference_call()
        };
        assert!(solve_with(SchemeKind::Explicit, &odd, SolverSettings::default())
            .unwrap_err()
            .is_invalid_parameter());
    }
}
