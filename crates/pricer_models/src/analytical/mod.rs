//! Analytical pricing formulas for European options.
//!
//! - Black-Scholes model for lognormal dynamics
//!
//! The normal CDF comes from `pricer_core::math::distributions`, which is
//! erfc-based for accuracy in the tails.

pub mod black_scholes;

pub use black_scholes::{price, BlackScholes};
