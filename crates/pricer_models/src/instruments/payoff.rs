//! European option payoffs.
//!
//! Settlement value at maturity for a given terminal asset price:
//! - Call: max(S_T - K, 0)
//! - Put: max(K - S_T, 0)

use pricer_core::types::{OptionType, PricingError};

/// Payoff of an option with a typed side.
///
/// This is the hot-path form used inside the simulation loop and for the
/// intrinsic value at expiry.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::instruments::intrinsic;
///
/// assert_eq!(intrinsic(OptionType::Call, 110.0, 100.0), 10.0);
/// assert_eq!(intrinsic(OptionType::Put, 110.0, 100.0), 0.0);
/// ```
#[inline]
pub fn intrinsic(option_type: OptionType, terminal: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (terminal - strike).max(0.0),
        OptionType::Put => (strike - terminal).max(0.0),
    }
}

/// Payoff `(S_T, K, type)`.
///
/// Accepts an `OptionType` or text such as `"call"` / `"PUT"`.
///
/// # Errors
/// `PricingError::InvalidParameter` if the option type text is neither call
/// nor put.
///
/// # Examples
/// ```
/// use pricer_models::instruments::payoff;
///
/// assert_eq!(payoff(90.0, 100.0, "put").unwrap(), 10.0);
/// assert!(payoff(90.0, 100.0, "straddle").is_err());
/// ```
#[inline]
pub fn payoff<O>(terminal: f64, strike: f64, option_type: O) -> Result<f64, PricingError>
where
    O: TryInto<OptionType>,
    PricingError: From<O::Error>,
{
    Ok(intrinsic(option_type.try_into()?, terminal, strike))
}
