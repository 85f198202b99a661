//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and its builder for Monte
//! Carlo pricing runs.

use pricer_core::math::DEFAULT_CONFIDENCE_LEVEL;
use pricer_core::types::PricingError;

/// Default number of paths per chunk (one generator stream per chunk).
pub const DEFAULT_CHUNK_SIZE: usize = 65_536;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.confidence_level(), 0.95);
/// assert!(config.parallel());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Two-sided confidence level of the reported interval.
    confidence_level: f64,
    /// Paths per generator stream.
    chunk_size: usize,
    /// Run chunks on the rayon pool.
    parallel: bool,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the confidence level of the reported interval.
    #[inline]
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Returns the number of paths per chunk.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns whether chunks run in parallel.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Number of chunks the paths are split into.
    #[inline]
    pub fn n_chunks(&self) -> usize {
        self.n_paths.div_ceil(self.chunk_size)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if:
    /// - `n_paths` is 0
    /// - `chunk_size` is 0
    /// - `confidence_level` is not strictly inside (0, 1)
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_paths == 0 {
            return Err(PricingError::invalid("n_paths", "must be at least 1, got 0"));
        }
        if self.chunk_size == 0 {
            return Err(PricingError::invalid(
                "chunk_size",
                "must be at least 1, got 0",
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(PricingError::invalid(
                "confidence_level",
                format!("must lie in (0, 1), got {}", self.confidence_level),
            ));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API for constructing Monte Carlo configurations
/// with validation at build time. Only `n_paths` is mandatory.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .confidence_level(0.99)
///     .chunk_size(10_000)
///     .parallel(false)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.n_chunks(), 5);
///
/// assert!(MonteCarloConfig::builder().n_paths(0).build().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    confidence_level: f64,
    chunk_size: usize,
    parallel: bool,
}

impl Default for MonteCarloConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: None,
            seed: None,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel: true,
        }
    }
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths (at least 1).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    ///
    /// Without a seed the engine draws one from OS entropy per run.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the two-sided confidence level, strictly inside (0, 1).
    #[inline]
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    /// Sets the number of paths per generator stream.
    ///
    /// Results depend on the chunk size for a given seed, since each chunk
    /// draws from its own stream.
    #[inline]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Enables or disables parallel execution across chunks.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if `n_paths` was not set or
    /// any value fails [`MonteCarloConfig::validate`].
    pub fn build(self) -> Result<MonteCarloConfig, PricingError> {
        let n_paths = self
            .n_paths
            .ok_or_else(|| PricingError::invalid("n_paths", "must be specified"))?;

        let config = MonteCarloConfig {
            n_paths,
            seed: self.seed,
            confidence_level: self.confidence_level,
            chunk_size: self.chunk_size,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = MonteCarloConfig::builder().n_paths(1_000).build().unwrap();

        assert_eq!(config.n_paths(), 1_000);
        assert_eq!(config.seed(), None);
        assert_eq!(config.confidence_level(), DEFAULT_CONFIDENCE_LEVEL);
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert!(config.parallel());
    }

    #[test]
    fn test_config_builder_all_fields() {
        let config = MonteCarloConfig::builder()
            .n_paths(10_000)
            .seed(7)
            .confidence_level(0.99)
            .chunk_size(512)
            .parallel(false)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.confidence_level(), 0.99);
        assert_eq!(config.chunk_size(), 512);
        assert!(!config.parallel());
    }

    #[test]
    fn test_config_missing_paths() {
        let err = MonteCarloConfig::builder().build().unwrap_err();
        assert_eq!(err.parameter(), "n_paths");
    }

    #[test]
    fn test_config_zero_paths() {
        let err = MonteCarloConfig::builder().n_paths(0).build().unwrap_err();
        assert_eq!(err.parameter(), "n_paths");
    }

    #[test]
    fn test_config_single_path_is_buildable() {
        assert!(MonteCarloConfig::builder().n_paths(1).build().is_ok());
    }

    #[test]
    fn test_config_zero_chunk_size() {
        let err = MonteCarloConfig::builder()
            .n_paths(10)
            .chunk_size(0)
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), "chunk_size");
    }

    #[test]
    fn test_config_confidence_level_bounds() {
        for level in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let err = MonteCarloConfig::builder()
                .n_paths(10)
                .confidence_level(level)
                .build()
                .unwrap_err();
            assert_eq!(err.parameter(), "confidence_level");
        }
    }

    #[test]
    fn test_maybe_seed() {
        let seeded = MonteCarloConfig::builder()
            .n_paths(10)
            .maybe_seed(Some(3))
            .build()
            .unwrap();
        assert_eq!(seeded.seed(), Some(3));

        let unseeded = MonteCarloConfig::builder()
            .n_paths(10)
            .seed(3)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(unseeded.seed(), None);
    }

    #[test]
    fn test_n_chunks_rounds_up() {
        let config = MonteCarloConfig::builder()
            .n_paths(1_001)
            .chunk_size(100)
            .build()
            .unwrap();
        assert_eq!(config.n_chunks(), 11);

        let single = MonteCarloConfig::builder().n_paths(5).build().unwrap();
        assert_eq!(single.n_chunks(), 1);
    }
}
