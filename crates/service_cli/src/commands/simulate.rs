//! Simulate command implementation
//!
//! Prices a European option by Monte Carlo and reports the confidence
//! interval of the estimate.

use pricer_core::types::{MarketParameters, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine, SimulationResult};
use serde::Serialize;
use tracing::info;

use super::{market_rows, simulation_rows, Render};
use crate::args::MarketArgs;
use crate::Result;

/// Monte Carlo estimate of one option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Call or put.
    pub option_type: OptionType,
    /// Market inputs.
    pub market: MarketParameters,
    /// Price, standard error and interval.
    pub monte_carlo: SimulationResult,
}

impl Render for SimulationReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = market_rows(self.option_type, &self.market);
        rows.extend(simulation_rows(&self.monte_carlo));
        rows
    }
}

/// Run the simulate command
pub fn run(args: &MarketArgs, config: MonteCarloConfig) -> Result<SimulationReport> {
    let option_type: OptionType = args.option_type.parse()?;
    let market = args.to_market();

    info!(
        n_paths = config.n_paths(),
        parallel = config.parallel(),
        "Starting Monte Carlo simulation"
    );
    let result = MonteCarloEngine::new(config)?.simulate(&market, option_type)?;
    info!(
        price = result.price,
        std_error = result.std_error,
        seed = result.seed,
        "Simulation complete"
    );

    Ok(SimulationReport {
        option_type,
        market,
        monte_carlo: result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_args(option_type: &str) -> MarketArgs {
        MarketArgs {
            spot: 100.0,
            strike: 95.0,
            maturity: 0.25,
            rate: 0.1,
            volatility: 0.5,
            option_type: option_type.to_string(),
        }
    }

    fn config(n_paths: usize) -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .n_paths(n_paths)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_simulate_reports_seed_and_paths() {
        let report = run(&demo_args("put"), config(20_000)).unwrap();
        assert_eq!(report.option_type, OptionType::Put);
        assert_eq!(report.monte_carlo.seed, 42);
        assert_eq!(report.monte_carlo.n_paths, 20_000);
        assert!(report.monte_carlo.contains(report.monte_carlo.price));
    }

    #[test]
    fn test_simulate_expired_option() {
        let args = MarketArgs {
            maturity: 0.0,
            ..demo_args("call")
        };
        let report = run(&args, config(100)).unwrap();
        assert_eq!(report.monte_carlo.price, 5.0);
        assert_eq!(report.monte_carlo.width(), 0.0);
    }

    #[test]
    fn test_simulate_single_path_fails() {
        assert!(run(&demo_args("call"), config(1)).is_err());
    }

    #[test]
    fn test_simulate_json_has_interval() {
        let report = run(&demo_args("call"), config(5_000)).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["option_type"], "call");
        assert!(value["monte_carlo"]["confidence_interval"].is_array());
        assert_eq!(value["monte_carlo"]["seed"], 42);
    }
}
