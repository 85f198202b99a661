//! Error types for structured error handling.
//!
//! Every failure in the pricing core is a caller input error, so there is a
//! single kind: [`PricingError::InvalidParameter`]. Errors are raised
//! synchronously and never carry a partial result.

use std::convert::Infallible;

use thiserror::Error;

/// Pricing errors.
///
/// # Variants
/// - `InvalidParameter`: an input was outside its valid domain (unknown
///   option type, non-positive volatility with positive maturity, too few
///   paths or samples, non-finite value, ...)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid("volatility", "must be positive when maturity > 0, got -0.2");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'volatility': must be positive when maturity > 0, got -0.2"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// An input parameter was outside its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of why the value was rejected.
        reason: String,
    },
}

impl PricingError {
    /// Creates an [`PricingError::InvalidParameter`] error.
    #[inline]
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PricingError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the name of the rejected parameter.
    #[inline]
    pub fn parameter(&self) -> &'static str {
        match self {
            PricingError::InvalidParameter { name, .. } => name,
        }
    }
}

// Lets pricing entry points accept an `OptionType` directly through the same
// `TryInto<OptionType>` bound used for text input.
impl From<Infallible> for PricingError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
