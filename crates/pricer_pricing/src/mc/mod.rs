//! Monte Carlo pricing of European options.
//!
//! This module estimates an option's price as the discounted mean payoff
//! over simulated terminal prices, and reports how precise that estimate
//! is through its standard error and confidence interval.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── MonteCarloConfig   (paths, seed, confidence level, chunking)
//! └── simulate()
//!     ├── PricerRng::for_stream(seed, chunk)   one stream per chunk
//!     ├── accumulate_payoffs()                 GBM terminal price -> payoff
//!     ├── RunningStats::merge                  in chunk order
//!     └── SimulationResult                     price, std error, interval
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::MarketParameters;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(100_000)
//!     .seed(42)
//!     .confidence_level(0.99)
//!     .build()
//!     .unwrap();
//! let engine = MonteCarloEngine::new(config).unwrap();
//!
//! let market = MarketParameters::new(100.0, 95.0, 0.25, 0.1, 0.5);
//! let call = engine.simulate(&market, "call").unwrap();
//! let put = engine.simulate(&market, "put").unwrap();
//!
//! println!(
//!     "call {:.4} [{:.4}, {:.4}], put {:.4} [{:.4}, {:.4}]",
//!     call.price, call.lower(), call.upper(),
//!     put.price, put.lower(), put.upper(),
//! );
//! ```

mod config;
mod engine;
mod result;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_CHUNK_SIZE};
pub use engine::{accumulate_payoffs, simulate, MonteCarloEngine};
pub use result::SimulationResult;
