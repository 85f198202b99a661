//! Black-Scholes pricing model for European options.
//!
//! This module provides the closed-form Black-Scholes price, used as the
//! reference value the Monte Carlo engine is checked against.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! At or past expiry (T ≤ 0) the price is the intrinsic payoff, computed
//! directly without going through the formula.

use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::{MarketParameters, OptionType, PricingError};

use crate::instruments::payoff::intrinsic;

/// Prices a European option with the Black-Scholes formula.
///
/// # Arguments
/// * `market` - Spot, strike, maturity, rate and volatility
/// * `option_type` - `OptionType` or text such as `"call"` / `"Put"`
///
/// # Errors
/// `PricingError::InvalidParameter` if the option type is not call/put, if
/// spot or strike is not positive, or if volatility is not positive while
/// maturity is.
///
/// # Examples
/// ```
/// use pricer_core::types::MarketParameters;
/// use pricer_models::analytical::black_scholes::price;
///
/// let market = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// let call = price(&market, "call").unwrap();
/// assert!((call - 10.4506).abs() < 1e-3);
///
/// // At expiry only the intrinsic value is left.
/// let expired = MarketParameters::new(95.0, 100.0, 0.0, 0.05, 0.2);
/// assert_eq!(price(&expired, "put").unwrap(), 5.0);
///
/// assert!(price(&market, "banana").is_err());
/// ```
pub fn price<O>(market: &MarketParameters, option_type: O) -> Result<f64, PricingError>
where
    O: TryInto<OptionType>,
    PricingError: From<O::Error>,
{
    let option_type = option_type.try_into()?;
    market.validate()?;

    if market.is_expired() {
        return Ok(intrinsic(option_type, market.spot, market.strike));
    }

    let model = BlackScholes::new(market.spot, market.rate, market.volatility)?;
    Ok(model.price_option(market.strike, market.maturity, option_type))
}

/// Black-Scholes model for European option pricing.
///
/// Holds the model state (spot, rate, volatility) so several strikes and
/// expiries can be priced against the same market.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (continuously compounded)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if spot or volatility is not
    /// positive, or if any input is not finite.
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::invalid(
                "spot",
                format!("must be positive and finite, got {}", spot),
            ));
        }
        if !rate.is_finite() {
            return Err(PricingError::invalid(
                "rate",
                format!("must be finite, got {}", rate),
            ));
        }
        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(PricingError::invalid(
                "volatility",
                format!("must be positive and finite, got {}", volatility),
            ));
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// For `expiry <= 0` returns the limit: `+∞` in the money, `-∞` out of
    /// the money, `0` at the money.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return expiry_limit(self.spot, strike);
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return expiry_limit(self.spot, strike);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// Returns the intrinsic value `max(S - K, 0)` when `expiry <= 0`.
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return intrinsic(OptionType::Call, self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// Returns the intrinsic value `max(K - S, 0)` when `expiry <= 0`.
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return intrinsic(OptionType::Put, self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices the given option side.
    #[inline]
    pub fn price_option(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }
}

fn expiry_limit(spot: f64, strike: f64) -> f64 {
    if spot > strike {
        f64::INFINITY
    } else if spot < strike {
        f64::NEG_INFINITY
    } else {
        0.0
    }
}
