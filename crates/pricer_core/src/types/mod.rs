//! Core value types shared by every pricer layer.
//!
//! This module provides:
//! - `error`: the `PricingError` type raised on invalid caller input
//! - `option_type`: the `OptionType` enum (Call/Put) and its text parsing
//! - `market`: `MarketParameters`, the immutable inputs of a pricing call
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod error;
pub mod market;
pub mod option_type;

pub use error::PricingError;
pub use market::MarketParameters;
pub use option_type::OptionType;
