//! Compare command implementation
//!
//! Prices the same option both ways and checks whether the Monte Carlo
//! interval brackets the closed-form price.

use pricer_core::types::{MarketParameters, OptionType};
use pricer_models::analytical::black_scholes;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine, SimulationResult};
use serde::Serialize;
use tracing::{info, warn};

use super::{market_rows, money, simulation_rows, Render};
use crate::args::MarketArgs;
use crate::Result;

/// Closed-form and simulated prices side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Call or put.
    pub option_type: OptionType,
    /// Market inputs.
    pub market: MarketParameters,
    /// Black-Scholes price.
    pub analytic: f64,
    /// Monte Carlo estimate.
    pub monte_carlo: SimulationResult,
    /// `monte_carlo.price - analytic`.
    pub difference: f64,
    /// Whether the interval contains the analytic price.
    pub within_interval: bool,
}

impl Render for ComparisonReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = market_rows(self.option_type, &self.market);
        rows.push(("Black-Scholes price", money(self.analytic)));
        rows.extend(simulation_rows(&self.monte_carlo));
        rows.push(("Difference", money(self.difference)));
        rows.push((
            "Within interval",
            if self.within_interval { "yes" } else { "no" }.to_string(),
        ));
        rows
    }
}

/// Run the compare command
pub fn run(args: &MarketArgs, config: MonteCarloConfig) -> Result<ComparisonReport> {
    let option_type: OptionType = args.option_type.parse()?;
    let market = args.to_market();

    let analytic = black_scholes::price(&market, option_type)?;
    let monte_carlo = MonteCarloEngine::new(config)?.simulate(&market, option_type)?;
    let within_interval = monte_carlo.contains(analytic);

    if within_interval {
        info!(analytic, mc = monte_carlo.price, "Interval brackets the analytic price");
    } else {
        warn!(
            analytic,
            mc = monte_carlo.price,
            lower = monte_carlo.lower(),
            upper = monte_carlo.upper(),
            "Analytic price lies outside the Monte Carlo interval"
        );
    }

    Ok(ComparisonReport {
        option_type,
        market,
        analytic,
        difference: monte_carlo.price - analytic,
        monte_carlo,
        within_interval,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(option_type: &str, maturity: f64) -> MarketArgs {
        MarketArgs {
            spot: 100.0,
            strike: 100.0,
            maturity,
            rate: 0.05,
            volatility: 0.2,
            option_type: option_type.to_string(),
        }
    }

    fn config(n_paths: usize, level: f64) -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .n_paths(n_paths)
            .seed(7)
            .confidence_level(level)
            .build()
            .unwrap()
    }

    #[test]
    fn test_compare_brackets_reference_price() {
        let report = run(&args("call", 1.0), config(200_000, 0.999)).unwrap();
        assert!(report.within_interval, "{:?}", report);
        assert_eq!(report.difference, report.monte_carlo.price - report.analytic);
    }

    #[test]
    fn test_compare_at_expiry_is_exact() {
        let report = run(&args("put", 0.0), config(1_000, 0.95)).unwrap();
        assert_eq!(report.analytic, 0.0);
        assert_eq!(report.monte_carlo.price, 0.0);
        assert_eq!(report.difference, 0.0);
        assert!(report.within_interval);
    }

    #[test]
    fn test_compare_rows_end_with_verdict() {
        let report = run(&args("put", 0.0), config(1_000, 0.95)).unwrap();
        assert_eq!(
            report.rows().last().unwrap(),
            &("Within interval", "yes".to_string())
        );
    }
}
