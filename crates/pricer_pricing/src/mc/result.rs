//! Monte Carlo pricing result.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Outcome of one Monte Carlo pricing run.
///
/// All monetary values are discounted to today.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationResult;
///
/// let result = SimulationResult {
///     price: 10.45,
///     std_error: 0.015,
///     confidence_interval: (10.42, 10.48),
///     confidence_level: 0.95,
///     n_paths: 1_000_000,
///     seed: 42,
/// };
///
/// assert!(result.contains(10.4506));
/// assert!((result.width() - 0.06).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SimulationResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// `(lower, upper)` bounds of the confidence interval around `price`.
    pub confidence_interval: (f64, f64),
    /// Two-sided confidence level of `confidence_interval`.
    pub confidence_level: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Master seed the run used; passing it back reproduces the run.
    pub seed: u64,
}

impl SimulationResult {
    /// Lower bound of the confidence interval.
    #[inline]
    pub fn lower(&self) -> f64 {
        self.confidence_interval.0
    }

    /// Upper bound of the confidence interval.
    #[inline]
    pub fn upper(&self) -> f64 {
        self.confidence_interval.1
    }

    /// Width of the confidence interval (`upper - lower`).
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper() - self.lower()
    }

    /// Returns `true` if `value` lies in the closed confidence interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lower() <= value && value <= self.upper()
    }
}
