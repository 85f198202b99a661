//! Market inputs of a single pricing call.

use super::error::PricingError;

/// Inputs of a European option pricing call.
///
/// Immutable per call. Volatility is only required to be positive when the
/// option has time left to run; at `maturity <= 0` the price is the
/// intrinsic payoff and neither `rate` nor `volatility` is used.
///
/// # Examples
/// ```
/// use pricer_core::types::MarketParameters;
///
/// let market = MarketParameters::new(100.0, 95.0, 0.25, 0.1, 0.5);
/// assert!(market.validate().is_ok());
///
/// // Zero volatility is fine at expiry, not before.
/// assert!(MarketParameters::new(100.0, 95.0, 0.0, 0.1, 0.0).validate().is_ok());
/// assert!(MarketParameters::new(100.0, 95.0, 1.0, 0.1, 0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    /// Spot price today (S₀), strictly positive.
    pub spot: f64,
    /// Strike price (K), strictly positive.
    pub strike: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
    /// Annualised volatility (σ).
    pub volatility: f64,
}

impl MarketParameters {
    /// Creates market parameters without validating them.
    #[inline]
    pub fn new(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
        }
    }

    /// Returns a copy with a different rate.
    #[inline]
    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    /// Returns a copy with a different maturity.
    #[inline]
    pub fn with_maturity(self, maturity: f64) -> Self {
        Self { maturity, ..self }
    }

    /// Returns `true` once the option has no time left to run.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.maturity <= 0.0
    }

    /// Validates the parameters for analytic pricing.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if:
    /// - any field is NaN or infinite
    /// - `spot` or `strike` is not strictly positive
    /// - `volatility <= 0` while `maturity > 0`
    pub fn validate(&self) -> Result<(), PricingError> {
        check_finite("spot", self.spot)?;
        check_finite("strike", self.strike)?;
        check_finite("maturity", self.maturity)?;
        check_finite("rate", self.rate)?;
        check_finite("volatility", self.volatility)?;

        if self.spot <= 0.0 {
            return Err(PricingError::invalid(
                "spot",
                format!("must be positive, got {}", self.spot),
            ));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::invalid(
                "strike",
                format!("must be positive, got {}", self.strike),
            ));
        }
        if self.maturity > 0.0 && self.volatility <= 0.0 {
            return Err(PricingError::invalid(
                "volatility",
                format!(
                    "must be positive when maturity > 0, got {}",
                    self.volatility
                ),
            ));
        }
        Ok(())
    }

    /// Validates the parameters for path simulation.
    ///
    /// Same as [`validate`](Self::validate), and additionally rejects a
    /// negative maturity.
    pub fn validate_for_simulation(&self) -> Result<(), PricingError> {
        self.validate()?;
        if self.maturity < 0.0 {
            return Err(PricingError::invalid(
                "maturity",
                format!("must be non-negative, got {}", self.maturity),
            ));
        }
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}
