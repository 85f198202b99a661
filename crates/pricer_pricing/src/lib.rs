//! # Pricer Pricing (L3: Simulation Engine)
//!
//! Monte Carlo pricing of European options under geometric Brownian motion.
//!
//! This crate provides:
//! - Seeded random number generation with independent per-chunk streams (`rng`)
//! - The Monte Carlo engine, its configuration and result type (`mc`)
//!
//! Closed-form prices, terminal-price sampling and payoffs come from
//! `pricer_models`; statistics and error types from `pricer_core`.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{MarketParameters, OptionType};
//! use pricer_models::analytical::black_scholes;
//! use pricer_pricing::mc;
//!
//! let market = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let analytic = black_scholes::price(&market, OptionType::Call).unwrap();
//! let estimate = mc::simulate(200_000, &market, OptionType::Call, Some(42)).unwrap();
//!
//! assert!((estimate.price - analytic).abs() < 6.0 * estimate.std_error);
//! ```
//!
//! ## Logging
//!
//! The engine emits `tracing` events (`debug` per run, `trace` per chunk).
//! Installing a subscriber is left to the binary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
