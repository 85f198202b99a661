//! Price command implementation
//!
//! Prices a European option with the Black-Scholes formula.

use pricer_core::types::{MarketParameters, OptionType};
use pricer_models::analytical::black_scholes;
use serde::Serialize;
use tracing::info;

use super::{market_rows, money, Render};
use crate::args::MarketArgs;
use crate::Result;

/// Closed-form price of one option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    /// Call or put.
    pub option_type: OptionType,
    /// Market inputs.
    pub market: MarketParameters,
    /// Black-Scholes price.
    pub price: f64,
}

impl Render for PriceReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = market_rows(self.option_type, &self.market);
        rows.push(("Black-Scholes price", money(self.price)));
        rows
    }
}

/// Run the price command
pub fn run(args: &MarketArgs) -> Result<PriceReport> {
    let option_type: OptionType = args.option_type.parse()?;
    let market = args.to_market();

    let price = black_scholes::price(&market, option_type)?;
    info!(option_type = %option_type, price, "Black-Scholes price computed");

    Ok(PriceReport {
        option_type,
        market,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn args(option_type: &str) -> MarketArgs {
        MarketArgs {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            option_type: option_type.to_string(),
        }
    }

    #[test]
    fn test_price_reference_call() {
        let report = run(&args("call")).unwrap();
        assert_eq!(report.option_type, OptionType::Call);
        assert_relative_eq!(report.price, 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_price_rejects_unknown_type() {
        assert!(matches!(
            run(&args("swap")),
            Err(crate::CliError::Pricing(_))
        ));
    }

    #[test]
    fn test_price_rows() {
        let rows = run(&args("put")).unwrap().rows();
        assert_eq!(rows[0], ("Option type", "put".to_string()));
        assert_eq!(rows.last().unwrap().0, "Black-Scholes price");
    }
}
