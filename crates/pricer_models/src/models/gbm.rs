//! Geometric Brownian Motion (GBM) model implementation.
//!
//! Under the risk-neutral measure the asset follows:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//!
//! ## Exact terminal solution
//!
//! Only the value at maturity is needed for a European payoff, and the SDE
//! has a closed-form solution, so each path is a single exact step:
//! ```text
//! S(T) = S(0) * exp((r - 0.5*sigma^2)*T + sigma*sqrt(T)*Z),  Z ~ N(0, 1)
//! ```
//! No time discretisation error is introduced. At `T = 0` both exponent
//! terms vanish and `S(T) = S(0)` for any draw.

use pricer_core::types::{MarketParameters, PricingError};

/// GBM model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r), continuously compounded.
    pub rate: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Time to maturity (T) in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters without validating them.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Extracts the model inputs of a pricing call.
    #[inline]
    pub fn from_market(market: &MarketParameters) -> Self {
        Self::new(market.spot, market.rate, market.volatility, market.maturity)
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` if any field is non-finite, spot is
    /// not positive, maturity is negative, or volatility is not positive
    /// while maturity is.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricingError::invalid(
                "spot",
                format!("must be positive and finite, got {}", self.spot),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::invalid(
                "rate",
                format!("must be finite, got {}", self.rate),
            ));
        }
        if !self.maturity.is_finite() || self.maturity < 0.0 {
            return Err(PricingError::invalid(
                "maturity",
                format!("must be finite and non-negative, got {}", self.maturity),
            ));
        }
        if !self.volatility.is_finite() || (self.maturity > 0.0 && self.volatility <= 0.0) {
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

    /// Validates the parameters and precomputes the terminal sampler.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn sampler(&self) -> Result<TerminalSampler, PricingError> {
        self.validate()?;

        let drift = (self.rate - 0.5 * self.volatility * self.volatility) * self.maturity;
        let diffusion = self.volatility * self.maturity.sqrt();

        Ok(TerminalSampler {
            spot: self.spot,
            drift,
            diffusion,
        })
    }
}

/// Validated GBM terminal-price map with the exponent terms hoisted.
///
/// Built once per simulation by [`GbmParams::sampler`]; mapping a normal
/// draw to a terminal price is then one multiply-add and one `exp`.
///
/// # Examples
/// ```
/// use pricer_models::models::GbmParams;
///
/// let sampler = GbmParams::new(100.0, 0.05, 0.2, 1.0).sampler().unwrap();
/// // Median path: z = 0
/// let median = sampler.sample(0.0);
/// assert!((median - 100.0 * (0.05_f64 - 0.02).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalSampler {
    spot: f64,
    /// (r - σ²/2)·T
    drift: f64,
    /// σ·√T
    diffusion: f64,
}

impl TerminalSampler {
    /// Terminal price for one standard normal draw.
    #[inline]
    pub fn sample(&self, z: f64) -> f64 {
        self.spot * (self.drift + self.diffusion * z).exp()
    }

    /// Writes the terminal price for each normal draw in `normals` to `out`.
    ///
    /// # Panics
    ///
    /// Panics if the two slices differ in length.
    pub fn fill(&self, normals: &[f64], out: &mut [f64]) {
        assert_eq!(
            normals.len(),
            out.len(),
            "normal draws and output buffer must have the same length"
        );
        for (price, &z) in out.iter_mut().zip(normals) {
            *price = self.sample(z);
        }
    }
}

/// Terminal asset price after one exact GBM step.
///
/// `S_T = S₀ · exp((r - σ²/2)·T + σ·√T·z)`
///
/// # Errors
///
/// `PricingError::InvalidParameter` for a negative maturity, a non-positive
/// spot, non-finite inputs, or a non-positive volatility with positive
/// maturity.
///
/// # Examples
/// ```
/// use pricer_models::models::terminal_price;
///
/// // No time to run: the spot comes back unchanged whatever the draw.
/// assert_eq!(terminal_price(100.0, 0.05, 0.2, 0.0, 1.7).unwrap(), 100.0);
///
/// assert!(terminal_price(100.0, 0.05, 0.2, -1.0, 0.0).is_err());
/// ```
pub fn terminal_price(
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    z: f64,
) -> Result<f64, PricingError> {
    let sampler = GbmParams::new(spot, rate, volatility, maturity).sampler()?;
    Ok(sampler.sample(z))
}
