//! Sampling statistics for Monte Carlo estimates.
//!
//! This module provides:
//! - [`standard_error`]: standard error of the mean of a sample
//! - [`confidence_interval`]: normal-approximation interval around a mean
//! - [`RunningStats`]: single-pass mean/variance accumulator that can be
//!   merged across workers
//!
//! # Small samples
//!
//! The sample standard deviation uses the unbiased `n - 1` divisor and is
//! undefined below two observations. Both [`standard_error`] and
//! [`RunningStats::standard_error`] reject such samples with
//! `PricingError::InvalidParameter` instead of reporting zero. A sample of
//! two or more identical values is fine and yields exactly zero.

use super::distributions::norm_inv_cdf;
use crate::types::PricingError;

/// Confidence level used when none is given.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Standard error of the sample mean: `sample_std(values, ddof = 1) / √n`.
///
/// # Errors
///
/// `PricingError::InvalidParameter` if `values` has fewer than two elements.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::standard_error;
///
/// let se = standard_error(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((se - 0.7559289460184544).abs() < 1e-12);
///
/// assert_eq!(standard_error(&[3.0, 3.0, 3.0]).unwrap(), 0.0);
/// assert!(standard_error(&[1.0]).is_err());
/// ```
pub fn standard_error(values: &[f64]) -> Result<f64, PricingError> {
    values
        .iter()
        .copied()
        .collect::<RunningStats>()
        .standard_error()
}

/// Normal-approximation confidence interval `mean ± z · std_error`.
///
/// `z = Φ⁻¹(1 - α/2)` with `α = 1 - level`, e.g. 1.959964 at 95%.
///
/// # Errors
///
/// `PricingError::InvalidParameter` if `level` is not strictly inside
/// (0, 1), if `std_error` is negative or non-finite, or if `mean` is
/// non-finite.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::confidence_interval;
///
/// let (lower, upper) = confidence_interval(10.0, 0.5, 0.95).unwrap();
/// assert!((lower - (10.0 - 1.959964 * 0.5)).abs() < 1e-6);
/// assert!((upper - (10.0 + 1.959964 * 0.5)).abs() < 1e-6);
/// ```
pub fn confidence_interval(
    mean: f64,
    std_error: f64,
    level: f64,
) -> Result<(f64, f64), PricingError> {
    if !(level > 0.0 && level < 1.0) {
        return Err(PricingError::invalid(
            "confidence_level",
            format!("must lie strictly between 0 and 1, got {}", level),
        ));
    }
    if !std_error.is_finite() || std_error < 0.0 {
        return Err(PricingError::invalid(
            "std_error",
            format!("must be finite and non-negative, got {}", std_error),
        ));
    }
    if !mean.is_finite() {
        return Err(PricingError::invalid(
            "mean",
            format!("must be finite, got {}", mean),
        ));
    }

    let alpha = 1.0 - level;
    let z = norm_inv_cdf(1.0 - alpha / 2.0);
    let half_width = z * std_error;
    Ok((mean - half_width, mean + half_width))
}

/// Streaming accumulator for count, mean and sum of squared deviations.
///
/// Uses Welford's update for [`push`](Self::push) and Chan et al.'s pairwise
/// combination for [`merge`](Self::merge), so partial results from
/// independent workers can be reduced in any grouping. A stream of identical
/// values keeps an exact mean and a zero variance.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::RunningStats;
///
/// let mut left: RunningStats = [1.0, 2.0].into_iter().collect();
/// let right: RunningStats = [3.0, 4.0].into_iter().collect();
/// left.merge(&right);
///
/// assert_eq!(left.count(), 4);
/// assert!((left.mean() - 2.5).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one observation.
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Folds another accumulator into this one.
    pub fn merge(&mut self, other: &RunningStats) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }

        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let total = n_a + n_b;
        let delta = other.mean - self.mean;

        self.mean += delta * (n_b / total);
        self.m2 += other.m2 + delta * delta * (n_a * n_b / total);
        self.count += other.count;
    }

    /// Number of observations.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Arithmetic mean (0 when empty).
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Unbiased sample variance (`n - 1` divisor).
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` with fewer than two observations.
    pub fn sample_variance(&self) -> Result<f64, PricingError> {
        if self.count < 2 {
            return Err(PricingError::invalid(
                "samples",
                format!(
                    "sample standard deviation needs at least 2 values, got {}",
                    self.count
                ),
            ));
        }
        Ok((self.m2 / (self.count - 1) as f64).max(0.0))
    }

    /// Standard error of the mean: `sqrt(sample_variance) / √n`.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` with fewer than two observations.
    pub fn standard_error(&self) -> Result<f64, PricingError> {
        let std_dev = self.sample_variance()?.sqrt();
        Ok(std_dev / (self.count as f64).sqrt())
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = RunningStats::new();
        for value in iter {
            stats.push(value);
        }
        stats
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
