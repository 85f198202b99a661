//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that distribution functions are accessible via absolute path.
#[test]
fn test_distribution_module_exports() {
    use pricer_core::math::distributions::norm_cdf;
    use pricer_core::math::distributions::norm_inv_cdf;
    use pricer_core::math::distributions::norm_pdf;

    let _ = norm_cdf(0.5);
    let _ = norm_pdf(0.5);
    let _ = norm_inv_cdf(0.5);
}

/// Test that statistics helpers are accessible via absolute and re-exported paths.
#[test]
fn test_statistics_module_exports() {
    use pricer_core::math::statistics::{confidence_interval, standard_error, RunningStats};
    use pricer_core::math::DEFAULT_CONFIDENCE_LEVEL;

    let se = standard_error(&[1.0, 2.0, 3.0]).unwrap();
    let (lower, upper) = confidence_interval(2.0, se, DEFAULT_CONFIDENCE_LEVEL).unwrap();
    assert!(lower < 2.0 && 2.0 < upper);

    let stats: RunningStats = [1.0, 2.0, 3.0].into_iter().collect();
    assert_eq!(stats.standard_error().unwrap(), se);
}

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::market::MarketParameters;
    use pricer_core::types::option_type::OptionType;

    let market = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
    assert!(market.validate().is_ok());

    let err = "straddle".parse::<OptionType>().unwrap_err();
    assert!(matches!(err, PricingError::InvalidParameter { .. }));
}

/// Test that errors from every layer share the same kind.
#[test]
fn test_single_error_kind() {
    use pricer_core::math::statistics::standard_error;
    use pricer_core::types::{MarketParameters, OptionType, PricingError};

    let errors = [
        "banana".parse::<OptionType>().unwrap_err(),
        MarketParameters::new(100.0, 100.0, 1.0, 0.05, -0.2)
            .validate()
            .unwrap_err(),
        standard_error(&[42.0]).unwrap_err(),
    ];

    for err in errors {
        let PricingError::InvalidParameter { reason, .. } = err;
        assert!(!reason.is_empty());
    }
}
