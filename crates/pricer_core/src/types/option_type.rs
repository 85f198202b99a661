//! Option side (Call/Put).

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Side of a European option.
///
/// Only `Call` and `Put` exist; unrecognised text is an error, never a
/// default. Parsing is case-insensitive and ignores surrounding whitespace.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
/// assert!("banana".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike: pays max(S - K, 0).
    Call,
    /// Right to sell at the strike: pays max(K - S, 0).
    Put,
}

impl OptionType {
    /// Lowercase name, as accepted by [`FromStr`].
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Returns `true` for [`OptionType::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("call") {
            Ok(OptionType::Call)
        } else if trimmed.eq_ignore_ascii_case("put") {
            Ok(OptionType::Put)
        } else {
            Err(PricingError::invalid(
                "option_type",
                format!("must be 'call' or 'put', got '{}'", s),
            ))
        }
    }
}

impl TryFrom<&str> for OptionType {
    type Error = PricingError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for OptionType {
    type Error = PricingError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        for text in ["call", "Call", "CALL", " call "] {
            assert_eq!(text.parse::<OptionType>().unwrap(), OptionType::Call);
        }
        for text in ["put", "Put", "PUT"] {
            assert_eq!(text.parse::<OptionType>().unwrap(), OptionType::Put);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for text in ["banana", "", "calls", "c", "straddle"] {
            let err = text.parse::<OptionType>().unwrap_err();
            assert!(matches!(
                err,
                PricingError::InvalidParameter {
                    name: "option_type",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_try_from_string() {
        let side = OptionType::try_from("Put".to_string()).unwrap();
        assert_eq!(side, OptionType::Put);
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for side in [OptionType::Call, OptionType::Put] {
            assert_eq!(side.to_string().parse::<OptionType>().unwrap(), side);
        }
    }

    #[test]
    fn test_is_call() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Put.is_call());
    }
}
