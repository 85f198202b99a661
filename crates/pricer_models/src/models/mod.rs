//! Stochastic models for the underlying asset.
//!
//! - `gbm`: geometric Brownian motion, simulated exactly to maturity

pub mod gbm;

pub use gbm::{terminal_price, GbmParams, TerminalSampler};
