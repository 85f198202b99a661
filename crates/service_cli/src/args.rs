//! Shared command-line argument groups.

use clap::{Args, ValueEnum};
use pricer_core::types::MarketParameters;

/// Market inputs. Defaults reproduce the demo scenario
/// (S0=100, K=95, T=0.25, r=10%, sigma=50%).
#[derive(Args, Debug, Clone, PartialEq)]
pub struct MarketArgs {
    /// Spot price of the underlying
    #[arg(long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price
    #[arg(short = 'k', long, default_value_t = 95.0)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(short = 'T', long, default_value_t = 0.25, allow_negative_numbers = true)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub rate: f64,

    /// Annualised volatility
    #[arg(short = 's', long, default_value_t = 0.5)]
    pub volatility: f64,

    /// Option type (call or put)
    #[arg(short = 't', long = "option-type", default_value = "call")]
    pub option_type: String,
}

impl MarketArgs {
    /// Market parameters of the pricing call (unvalidated).
    pub fn to_market(&self) -> MarketParameters {
        MarketParameters::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
        )
    }
}

/// Monte Carlo overrides; unset values fall back to configuration.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SimulationArgs {
    /// Number of simulated paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Confidence level of the interval, e.g. 0.95
    #[arg(short, long)]
    pub confidence: Option<f64>,

    /// Run on the calling thread only
    #[arg(long)]
    pub sequential: bool,
}

/// Report output format.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}
