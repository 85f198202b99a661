//! CLI configuration management
//!
//! Handles loading configuration from a TOML file and environment variables.
//! Command-line flags are applied last by the caller.
//!
//! ```toml
//! log_level = "info"
//!
//! [monte_carlo]
//! n_paths = 1000000
//! seed = 42
//! confidence_level = 0.95
//! parallel = true
//! ```

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use pricer_core::math::DEFAULT_CONFIDENCE_LEVEL;
use pricer_core::types::PricingError;
use pricer_pricing::mc::MonteCarloConfig;

use crate::args::SimulationArgs;

/// Configuration file read when `--config` is not given (if present).
pub const DEFAULT_CONFIG_FILE: &str = "option_pricer.toml";

/// Default number of Monte Carlo paths.
pub const DEFAULT_PATHS: usize = 100_000;

/// Environment variable overriding the path count.
pub const ENV_PATHS: &str = "OPTION_PRICER_PATHS";
/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "OPTION_PRICER_SEED";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "OPTION_PRICER_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable held an unusable value.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-chunk engine events and above.
    Trace,
    /// Per-run engine events and above.
    Debug,
    /// Default.
    #[default]
    Info,
    /// Warnings and errors.
    Warn,
    /// Errors only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// `[monte_carlo]` section: defaults for `simulate` and `compare`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonteCarloSettings {
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Master seed; drawn from OS entropy when absent.
    pub seed: Option<u64>,
    /// Two-sided confidence level of the reported interval.
    pub confidence_level: f64,
    /// Run path chunks on all cores.
    pub parallel: bool,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            seed: None,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            parallel: true,
        }
    }
}

impl MonteCarloSettings {
    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &SimulationArgs) {
        if let Some(paths) = cli.paths {
            self.n_paths = paths;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(level) = cli.confidence {
            self.confidence_level = level;
        }
        if cli.sequential {
            self.parallel = false;
        }
    }

    /// Builds the engine configuration.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` for a zero path count or a
    /// confidence level outside (0, 1).
    pub fn to_engine_config(&self) -> Result<MonteCarloConfig, PricingError> {
        MonteCarloConfig::builder()
            .n_paths(self.n_paths)
            .maybe_seed(self.seed)
            .confidence_level(self.confidence_level)
            .parallel(self.parallel)
            .build()
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Monte Carlo defaults
    pub monte_carlo: MonteCarloSettings,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Loads the file given on the command line, or the default file if it
    /// exists, or the built-in defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Override with environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Override with variables resolved through `lookup`
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(paths) = lookup(ENV_PATHS) {
            self.monte_carlo.n_paths = paths.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} must be a path count, got '{}'", ENV_PATHS, paths))
            })?;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            self.monte_carlo.seed = Some(seed.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} must be an unsigned integer, got '{}'", ENV_SEED, seed))
            })?);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        Ok(())
    }
}
