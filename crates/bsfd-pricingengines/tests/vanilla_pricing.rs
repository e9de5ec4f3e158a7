use approx::assert_abs_diff_eq;
use bsfd_instruments::{OptionType, PricingEngine, VanillaOption};
use bsfd_methods::{solve_with, SchemeKind, SolverSettings};
use bsfd_pricingengines::{
    black_scholes_merton, price, price_explicit, price_implicit, AnalyticEuropeanEngine,
    FdBlackScholesVanillaEngine, STABILITY_NORM,
};
use proptest::prelude::*;

// S=50, K=50, T=1, r=10%, q=0, σ=25%, N=100, M=40

#[test]
fn implicit_european_call() {
    let r = price_implicit(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 40, true, false).unwrap();
    assert_abs_diff_eq!(r.fair_value, 7.9759, epsilon = 0.01);
    assert_abs_diff_eq!(r.stability_norm, 0.999, epsilon = 0.01);
}

#[test]
fn explicit_european_call_agrees_with_implicit() {
    let explicit = price_explicit(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 40, true, false).unwrap();
    let implicit = price_implicit(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 40, true, false).unwrap();
    assert_abs_diff_eq!(explicit.fair_value, 7.9412, epsilon = 0.01);
    assert_abs_diff_eq!(explicit.stability_norm, 0.999, epsilon = 0.01);
    assert_abs_diff_eq!(explicit.fair_value, implicit.fair_value, epsilon = 0.5);
}

#[test]
fn puts_on_both_schemes() {
    let cases = [
        (SchemeKind::Implicit, false, 2.6997),
        (SchemeKind::Implicit, true, 3.2298),
        (SchemeKind::Explicit, false, 2.7092),
        (SchemeKind::Explicit, true, 3.2514),
    ];
    for (scheme, american, expected) in cases {
        let r = price(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 40, false, american, scheme).unwrap();
        assert_abs_diff_eq!(r.fair_value, expected, epsilon = 1e-3);
    }
}

#[test]
fn american_call_without_dividends_is_european() {
    for scheme in [SchemeKind::Explicit, SchemeKind::Implicit] {
        let eu = price(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 40, true, false, scheme).unwrap();
        let am = price(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 40, true, true, scheme).unwrap();
        assert_abs_diff_eq!(am.fair_value, eu.fair_value, epsilon = 1e-10);
    }
}

#[test]
fn european_prices_track_the_closed_form() {
    for (is_call, option_type) in [(true, OptionType::Call), (false, OptionType::Put)] {
        let analytic = black_scholes_merton(option_type, 50.0, 50.0, 0.1, 0.0, 0.25, 1.0);
        for scheme in [SchemeKind::Explicit, SchemeKind::Implicit] {
            let fd = price(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 40, is_call, false, scheme)
                .unwrap()
                .fair_value;
            assert!((fd - analytic).abs() < 0.6, "{scheme} {option_type}: {fd} vs {analytic}");
        }
    }
}

#[test]
fn engines_through_the_instrument() {
    let option = VanillaOption::european(OptionType::Call, 50.0, 1.0);
    let fd = FdBlackScholesVanillaEngine::new(50.0, 0.1, 0.0, 0.25, 100, 40);
    let analytic = AnalyticEuropeanEngine::new(50.0, 0.1, 0.0, 0.25);
    let fd_results = option.price(&fd).unwrap();
    let analytic_results = analytic.calculate(&option.arguments()).unwrap();
    assert_abs_diff_eq!(fd_results.npv, 7.9759, epsilon = 1e-3);
    assert!(fd_results.result(STABILITY_NORM).is_some());
    assert_abs_diff_eq!(analytic_results.npv, 7.4879, epsilon = 1e-3);
}

#[test]
fn singular_implicit_operator_is_a_numerical_error() {
    // r·dt = −1 zeroes the first diagonal entry and with it the first row
    let err = price_implicit(50.0, 1.0, 50.0, -1.0, 0.0, 0.25, 1, 10, true, false).unwrap_err();
    assert!(err.is_numerical(), "{err}");
}

#[test]
fn invalid_inputs_are_rejected_before_pricing() {
    let bad = [
        price_implicit(50.0, 0.0, 50.0, 0.1, 0.0, 0.25, 100, 40, true, false),
        price_implicit(50.0, 1.0, 0.0, 0.1, 0.0, 0.25, 100, 40, true, false),
        price_implicit(50.0, 1.0, 50.0, 0.1, 0.0, -0.25, 100, 40, true, false),
        price_implicit(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 0, 40, true, false),
        price_implicit(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 0, true, false),
        price_implicit(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 41, true, false),
        price_explicit(f64::NAN, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 40, true, false),
        price_explicit(50.0, 1.0, 50.0, f64::INFINITY, 0.0, 0.25, 100, 40, true, false),
    ];
    for r in bad {
        assert!(r.unwrap_err().is_invalid_parameter());
    }
}

#[test]
fn interpolated_extraction_follows_the_spot() {
    let engine = |spot: f64| {
        FdBlackScholesVanillaEngine::new(spot, 0.1, 0.0, 0.25, 100, 40)
            .with_settings(SolverSettings::interpolated())
    };
    let option = VanillaOption::european(OptionType::Call, 50.0, 1.0);
    let at_strike = option.price(&engine(50.0)).unwrap().npv;
    let mid_grid = price_implicit(50.0, 1.0, 50.0, 0.1, 0.0, 0.25, 100, 40, true, false)
        .unwrap()
        .fair_value;
    assert_abs_diff_eq!(at_strike, mid_grid, epsilon = 1e-12);

    // 60 sits on node 24 (dS = 2.5); 61.25 halfway between nodes 24 and 25
    let params = FdBlackScholesVanillaEngine::new(60.0, 0.1, 0.0, 0.25, 100, 40)
        .parameters(&option.arguments());
    let grid = solve_with(SchemeKind::Implicit, &params, SolverSettings::default()).unwrap();
    let present = grid.values.row(0);
    let itm = option.price(&engine(60.0)).unwrap().npv;
    assert!(itm > at_strike);
    assert_abs_diff_eq!(itm, present[24], epsilon = 1e-12);
    let between = option.price(&engine(61.25)).unwrap().npv;
    assert_abs_diff_eq!(between, 0.5 * (present[24] + present[25]), epsilon = 1e-9);

    assert!(option.price(&engine(150.0)).unwrap_err().is_invalid_parameter());
}

#[test]
fn low_volatility_call_approaches_discounted_forward_intrinsic() {
    let deterministic = 50.0 - 50.0 * (-0.1_f64).exp();
    for scheme in [SchemeKind::Explicit, SchemeKind::Implicit] {
        let r = price(50.0, 1.0, 50.0, 0.1, 0.0, 0.05, 100, 40, true, false, scheme).unwrap();
        assert!(
            (r.fair_value - deterministic).abs() < 0.3,
            "{scheme}: {} vs {deterministic}",
            r.fair_value
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn american_put_dominates_and_stays_bounded(
        strike in 50.0..150.0_f64,
        maturity in 0.25..2.0_f64,
        r in 0.0..0.1_f64,
        q in 0.0..0.05_f64,
        vol in 0.15..0.5_f64,
        half_m in 5_usize..=15,
        n in 20_usize..=80,
    ) {
        let m = 2 * half_m;
        let eu = price_implicit(strike, maturity, strike, r, q, vol, n, m, false, false).unwrap();
        let am = price_implicit(strike, maturity, strike, r, q, vol, n, m, false, true).unwrap();
        prop_assert!(eu.fair_value >= 0.0);
        prop_assert!(am.fair_value >= eu.fair_value - 1e-12);
        prop_assert!(am.fair_value <= 2.0 * strike);
        prop_assert!(eu.stability_norm > 0.0 && eu.stability_norm <= 1.0 + 1e-12);
    }
}
