//! # pricer_core: Foundation Types for the Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error type: `PricingError` with its single `InvalidParameter` kind (`types::error`)
//! - Option side: `OptionType` (`types::option_type`)
//! - Market inputs: `MarketParameters` (`types::market`)
//! - Standard normal distribution functions (`math::distributions`)
//! - Standard error and confidence intervals (`math::statistics`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: error function and inverse normal CDF
//! - thiserror: error derive
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::statistics::{confidence_interval, standard_error};
//! use pricer_core::types::{MarketParameters, OptionType};
//!
//! let market = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! assert!(market.validate().is_ok());
//!
//! let side: OptionType = "Call".parse().unwrap();
//! assert_eq!(side, OptionType::Call);
//!
//! let se = standard_error(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! let (lower, upper) = confidence_interval(2.5, se, 0.95).unwrap();
//! assert!(lower < 2.5 && upper > 2.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
