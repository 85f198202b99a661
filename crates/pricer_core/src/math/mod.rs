//! Numerical building blocks.
//!
//! - `distributions`: standard normal CDF, PDF and quantile
//! - `statistics`: standard error, confidence intervals, streaming moments

pub mod distributions;
pub mod statistics;

pub use distributions::{norm_cdf, norm_inv_cdf, norm_pdf};
pub use statistics::{
    confidence_interval, standard_error, RunningStats, DEFAULT_CONFIDENCE_LEVEL,
};
