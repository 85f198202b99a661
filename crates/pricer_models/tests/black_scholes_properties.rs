//! Property tests for the closed-form pricer.
//!
//! These cover the relations the Monte Carlo engine is later checked
//! against: put-call parity, exact intrinsic value at expiry and the
//! textbook reference price.

use approx::assert_relative_eq;
use pricer_core::types::{MarketParameters, OptionType, PricingError};
use pricer_models::analytical::black_scholes;
use pricer_models::instruments::{discount_factor, intrinsic, payoff};
use pricer_models::models::terminal_price;
use proptest::prelude::*;

// ============================================================================
// Reference values
// ============================================================================

#[test]
fn test_textbook_reference_call() {
    let market = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
    let call = black_scholes::price(&market, OptionType::Call).unwrap();
    assert_relative_eq!(call, 10.4506, epsilon = 1e-3);
}

#[test]
fn test_textbook_reference_put() {
    let market = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
    let put = black_scholes::price(&market, "put").unwrap();
    assert_relative_eq!(put, 5.5735, epsilon = 1e-3);
}

// ============================================================================
// Expiry
// ============================================================================

#[test]
fn test_expiry_price_is_exact_intrinsic() {
    for (spot, strike) in [(120.0, 100.0), (80.0, 100.0), (100.0, 100.0)] {
        let market = MarketParameters::new(spot, strike, 0.0, 0.07, 0.35);
        for option_type in [OptionType::Call, OptionType::Put] {
            let price = black_scholes::price(&market, option_type).unwrap();
            assert_eq!(price, intrinsic(option_type, spot, strike));
        }
    }
}

#[test]
fn test_expiry_terminal_price_feeds_payoff_unchanged() {
    let st = terminal_price(104.0, 0.1, 0.5, 0.0, -2.3).unwrap();
    assert_eq!(st, 104.0);
    assert_eq!(payoff(st, 100.0, "call").unwrap(), 4.0);
    assert_eq!(discount_factor(0.1, 0.0), 1.0);
}

// ============================================================================
// Invalid input
// ============================================================================

#[test]
fn test_unknown_option_type_is_invalid_parameter() {
    let market = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
    let err = black_scholes::price(&market, "binary").unwrap_err();
    assert!(matches!(
        err,
        PricingError::InvalidParameter {
            name: "option_type",
            ..
        }
    ));

    assert!(payoff(100.0, 100.0, "").is_err());
}

#[test]
fn test_zero_volatility_before_expiry_is_invalid_parameter() {
    let market = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.0);
    let err = black_scholes::price(&market, "call").unwrap_err();
    assert_eq!(err.parameter(), "volatility");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_put_call_parity(
        spot in 10.0..500.0_f64,
        strike in 10.0..500.0_f64,
        maturity in 0.01..5.0_f64,
        rate in -0.05..0.15_f64,
        volatility in 0.05..1.0_f64,
    ) {
        let market = MarketParameters::new(spot, strike, maturity, rate, volatility);
        let call = black_scholes::price(&market, OptionType::Call).unwrap();
        let put = black_scholes::price(&market, OptionType::Put).unwrap();
        let forward_value = spot - strike * discount_factor(rate, maturity);

        prop_assert!((call - put - forward_value).abs() < 1e-6);
    }

    #[test]
    fn prop_prices_within_no_arbitrage_bounds(
        spot in 10.0..500.0_f64,
        strike in 10.0..500.0_f64,
        maturity in 0.01..5.0_f64,
        rate in 0.0..0.15_f64,
        volatility in 0.05..1.0_f64,
    ) {
        let market = MarketParameters::new(spot, strike, maturity, rate, volatility);
        let call = black_scholes::price(&market, "call").unwrap();
        let put = black_scholes::price(&market, "put").unwrap();
        let df = discount_factor(rate, maturity);

        prop_assert!(call >= (spot - strike * df).max(0.0) - 1e-9);
        prop_assert!(call <= spot + 1e-9);
        prop_assert!(put >= (strike * df - spot).max(0.0) - 1e-9);
        prop_assert!(put <= strike * df + 1e-9);
    }

    #[test]
    fn prop_expired_price_is_intrinsic(
        spot in 1.0..300.0_f64,
        strike in 1.0..300.0_f64,
        rate in -0.05..0.15_f64,
        volatility in 0.0..1.0_f64,
    ) {
        let market = MarketParameters::new(spot, strike, 0.0, rate, volatility);
        prop_assert_eq!(
            black_scholes::price(&market, "call").unwrap(),
            (spot - strike).max(0.0)
        );
        prop_assert_eq!(
            black_scholes::price(&market, "put").unwrap(),
            (strike - spot).max(0.0)
        );
    }
}
