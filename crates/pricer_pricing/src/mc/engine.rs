//! Monte Carlo pricing engine for European options.
//!
//! # Overview
//!
//! [`MonteCarloEngine`] coordinates:
//! 1. Input validation (option type, market, configuration)
//! 2. Seed resolution (configured, or drawn from OS entropy)
//! 3. Chunked path simulation, one [`PricerRng`] stream per chunk
//! 4. Payoff accumulation into [`RunningStats`]
//! 5. Discounting and the confidence interval
//!
//! # Determinism
//!
//! Chunk `i` always draws from `PricerRng::for_stream(seed, i)`. Per-chunk
//! accumulators are collected in chunk order and merged sequentially, so a
//! given seed and chunk size produce a bit-identical result whether chunks
//! run on the rayon pool or on the calling thread.

use pricer_core::math::statistics::{confidence_interval, RunningStats};
use pricer_core::types::{MarketParameters, OptionType, PricingError};
use pricer_models::instruments::{discount_factor, intrinsic};
use pricer_models::models::{GbmParams, TerminalSampler};
use rayon::prelude::*;
use tracing::{debug, trace};

use super::config::MonteCarloConfig;
use super::result::SimulationResult;
use crate::rng::{NormalSource, PricerRng};

/// Normals drawn per batch inside a chunk.
const BATCH_SIZE: usize = 1024;

/// Monte Carlo pricing engine.
///
/// Holds a validated [`MonteCarloConfig`]; each call to
/// [`simulate`](Self::simulate) is self-contained.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{MarketParameters, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(20_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let engine = MonteCarloEngine::new(config).unwrap();
///
/// let market = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// let result = engine.simulate(&market, OptionType::Call).unwrap();
///
/// assert_eq!(result.seed, 42);
/// assert!((result.price - 10.45).abs() < 6.0 * result.std_error);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloEngine {
    config: MonteCarloConfig,
}

impl MonteCarloEngine {
    /// Creates a new engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices a European option by simulation.
    ///
    /// `option_type` accepts an [`OptionType`] or text such as `"call"`.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if:
    /// - the option type is neither call nor put
    /// - the market is invalid (non-positive spot or strike, negative
    ///   maturity, non-positive volatility with positive maturity,
    ///   non-finite values)
    /// - fewer than two paths are simulated, since the standard error is
    ///   undefined
    pub fn simulate<O>(
        &self,
        market: &MarketParameters,
        option_type: O,
    ) -> Result<SimulationResult, PricingError>
    where
        O: TryInto<OptionType>,
        PricingError: From<O::Error>,
    {
        let option_type = option_type.try_into()?;
        market.validate_for_simulation()?;
        let sampler = GbmParams::from_market(market).sampler()?;

        let seed = match self.config.seed() {
            Some(seed) => seed,
            None => {
                let seed = PricerRng::entropy_seed();
                debug!(seed, "no seed configured, drew one from OS entropy");
                seed
            }
        };

        let n_paths = self.config.n_paths();
        let chunk_size = self.config.chunk_size();
        let n_chunks = self.config.n_chunks();
        let parallel = self.config.parallel() && n_chunks > 1;

        debug!(
            seed,
            n_paths,
            n_chunks,
            chunk_size,
            parallel,
            option_type = option_type.as_str(),
            "starting Monte Carlo simulation"
        );

        let strike = market.strike;
        let run_chunk = |chunk: usize| -> RunningStats {
            let start = chunk * chunk_size;
            let len = chunk_size.min(n_paths - start);
            let mut rng = PricerRng::for_stream(seed, chunk as u64);
            let stats = accumulate_payoffs(&mut rng, &sampler, strike, option_type, len);
            trace!(chunk, paths = len, mean_payoff = stats.mean(), "chunk finished");
            stats
        };

        let partials: Vec<RunningStats> = if parallel {
            (0..n_chunks).into_par_iter().map(run_chunk).collect()
        } else {
            (0..n_chunks).map(run_chunk).collect()
        };

        let mut payoffs = RunningStats::new();
        for partial in &partials {
            payoffs.merge(partial);
        }

        let df = discount_factor(market.rate, market.maturity);
        let price = payoffs.mean() * df;
        let std_error = payoffs.standard_error()? * df;
        let level = self.config.confidence_level();
        let interval = confidence_interval(price, std_error, level)?;

        debug!(
            price,
            std_error,
            lower = interval.0,
            upper = interval.1,
            "Monte Carlo simulation finished"
        );

        Ok(SimulationResult {
            price,
            std_error,
            confidence_interval: interval,
            confidence_level: level,
            n_paths,
            seed,
        })
    }
}

/// Prices a European option by simulating `n_paths` terminal prices.
///
/// Uses the default confidence level (95%), chunk size and parallel
/// execution. With `seed = None` a seed is drawn from OS entropy and
/// reported in the result.
///
/// # Errors
///
/// Returns `PricingError::InvalidParameter` if `n_paths < 2`, the option
/// type is neither call nor put, or the market is invalid (see
/// [`MonteCarloEngine::simulate`]).
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketParameters;
/// use pricer_pricing::mc::simulate;
///
/// let market = MarketParameters::new(100.0, 95.0, 0.25, 0.1, 0.5);
/// let result = simulate(50_000, &market, "call", Some(7)).unwrap();
/// assert!(result.lower() <= result.price && result.price <= result.upper());
///
/// // No time left: every path settles at the intrinsic value.
/// let expired = market.with_maturity(0.0);
/// let result = simulate(1_000, &expired, "call", None).unwrap();
/// assert_eq!(result.price, 5.0);
/// assert_eq!(result.width(), 0.0);
///
/// assert!(simulate(0, &market, "call", Some(7)).is_err());
/// assert!(simulate(1_000, &market, "digital", Some(7)).is_err());
/// ```
pub fn simulate<O>(
    n_paths: usize,
    market: &MarketParameters,
    option_type: O,
    seed: Option<u64>,
) -> Result<SimulationResult, PricingError>
where
    O: TryInto<OptionType>,
    PricingError: From<O::Error>,
{
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .maybe_seed(seed)
        .build()?;
    MonteCarloEngine::new(config)?.simulate(market, option_type)
}

/// Simulates `n_paths` terminal prices and accumulates their undiscounted
/// payoffs.
///
/// Draws are taken from `source` in batches, mapped through `sampler` and
/// pushed into a single streaming accumulator.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionType;
/// use pricer_models::models::GbmParams;
/// use pricer_pricing::mc::accumulate_payoffs;
/// use pricer_pricing::rng::PricerRng;
///
/// let sampler = GbmParams::new(100.0, 0.05, 0.2, 1.0).sampler().unwrap();
/// let mut rng = PricerRng::from_seed(1);
/// let stats = accumulate_payoffs(&mut rng, &sampler, 100.0, OptionType::Put, 10_000);
/// assert_eq!(stats.count(), 10_000);
/// ```
pub fn accumulate_payoffs<S: NormalSource>(
    source: &mut S,
    sampler: &TerminalSampler,
    strike: f64,
    option_type: OptionType,
    n_paths: usize,
) -> RunningStats {
    let mut normals = [0.0; BATCH_SIZE];
    let mut terminals = [0.0; BATCH_SIZE];
    let mut stats = RunningStats::new();

    let mut remaining = n_paths;
    while remaining > 0 {
        let len = remaining.min(BATCH_SIZE);
        source.fill_normal(&mut normals[..len]);
        sampler.fill(&normals[..len], &mut terminals[..len]);
        for &terminal in &terminals[..len] {
            stats.push(intrinsic(option_type, terminal, strike));
        }
        remaining -= len;
    }

    stats
}
