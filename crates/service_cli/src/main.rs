//! option-pricer - European option pricing from the command line
//!
//! # Commands
//!
//! - `option-pricer price` - Black-Scholes price
//! - `option-pricer simulate` - Monte Carlo price with confidence interval
//! - `option-pricer compare` - both, and whether the interval brackets the
//!   closed-form price
//!
//! Without market flags every command prices the demo scenario
//! (S0=100, K=95, T=0.25, r=10%, sigma=50%).
//!
//! # Configuration
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`OPTION_PRICER_PATHS`, `OPTION_PRICER_SEED`,
//!    `OPTION_PRICER_LOG_LEVEL`)
//! 3. Configuration file (`--config`, or `option_pricer.toml` if present)
//! 4. Default values

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod commands;
mod config;
mod error;

use args::{MarketArgs, OutputFormat, SimulationArgs};
use config::{CliConfig, LogLevel};
pub use error::{CliError, Result};

/// European option pricer: Black-Scholes and Monte Carlo
#[derive(Parser)]
#[command(name = "option-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price with the Black-Scholes formula
    Price {
        #[command(flatten)]
        market: MarketArgs,
    },

    /// Price by Monte Carlo simulation
    Simulate {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        simulation: SimulationArgs,
    },

    /// Compare the Monte Carlo estimate with the Black-Scholes price
    Compare {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        simulation: SimulationArgs,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    config.apply_env()?;
    if cli.verbose {
        config.log_level = LogLevel::Debug;
    }

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Price { market } => {
            let report = commands::price::run(&market)?;
            commands::write_report(&report, cli.format, &mut out)
        }
        Commands::Simulate { market, simulation } => {
            config.monte_carlo.merge_with_cli(&simulation);
            let engine_config = config.monte_carlo.to_engine_config()?;
            let report = commands::simulate::run(&market, engine_config)?;
            commands::write_report(&report, cli.format, &mut out)
        }
        Commands::Compare { market, simulation } => {
            config.monte_carlo.merge_with_cli(&simulation);
            let engine_config = config.monte_carlo.to_engine_config()?;
            let report = commands::compare::run(&market, engine_config)?;
            commands::write_report(&report, cli.format, &mut out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate_with_global_flags() {
        let cli = Cli::try_parse_from([
            "option-pricer",
            "simulate",
            "--paths",
            "1000",
            "--seed",
            "3",
            "--format",
            "json",
            "--option-type",
            "put",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Simulate { market, simulation } => {
                assert_eq!(market.option_type, "put");
                assert_eq!(simulation.paths, Some(1_000));
                assert_eq!(simulation.seed, Some(3));
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_parse_price_defaults() {
        let cli = Cli::try_parse_from(["option-pricer", "price"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["option-pricer", "--format", "xml", "price"]).is_err());
    }
}
