//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form pricing, the asset price model and option payoffs.
//!
//! This crate provides:
//! - The Black-Scholes formula, used as the reference oracle (`analytical`)
//! - Exact geometric Brownian motion terminal prices (`models::gbm`)
//! - Call/put payoffs and discounting (`instruments`)
//!
//! ## Design Principles
//!
//! - **Free functions over stateless objects**: every operation is a pure
//!   function of its inputs
//! - **One error kind**: all failures are `PricingError::InvalidParameter`
//! - **Typed or textual option side**: entry points accept `OptionType` or
//!   any text that parses into one
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{MarketParameters, OptionType};
//! use pricer_models::analytical::black_scholes;
//!
//! let market = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let call = black_scholes::price(&market, OptionType::Call).unwrap();
//! let put = black_scholes::price(&market, "put").unwrap();
//!
//! // Put-call parity: C - P = S - K·e^(-rT)
//! let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
//! assert!(parity.abs() < 1e-10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
