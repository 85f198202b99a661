//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and returns a report;
//! [`write_report`] renders it as a table or as JSON.

pub mod compare;
pub mod price;
pub mod simulate;

use pricer_core::types::{MarketParameters, OptionType};
use pricer_pricing::mc::SimulationResult;
use serde::Serialize;
use std::io::Write;

use crate::args::OutputFormat;
use crate::Result;

/// A report with a human-readable tabular form.
pub trait Render {
    /// Label/value rows shown in table output.
    fn rows(&self) -> Vec<(&'static str, String)>;
}

/// Writes `report` to `out` in the requested format.
pub fn write_report<R, W>(report: &R, format: OutputFormat, out: &mut W) -> Result<()>
where
    R: Render + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(&report.rows(), out)?,
    }
    Ok(())
}

fn write_table<W: Write>(rows: &[(&'static str, String)], out: &mut W) -> std::io::Result<()> {
    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let left = "─".repeat(label_width + 2);
    let right = "─".repeat(value_width + 2);

    writeln!(out, "┌{}┬{}┐", left, right)?;
    for (label, value) in rows {
        writeln!(
            out,
            "│ {:<lw$} │ {:>vw$} │",
            label,
            value,
            lw = label_width,
            vw = value_width
        )?;
    }
    writeln!(out, "└{}┴{}┘", left, right)?;
    Ok(())
}

/// Formats a price for table output.
pub(crate) fn money(value: f64) -> String {
    format!("{:.6}", value)
}

/// Rows describing the priced contract and market.
pub(crate) fn market_rows(
    option_type: OptionType,
    market: &MarketParameters,
) -> Vec<(&'static str, String)> {
    vec![
        ("Option type", option_type.to_string()),
        ("Spot", market.spot.to_string()),
        ("Strike", market.strike.to_string()),
        ("Maturity (years)", market.maturity.to_string()),
        ("Rate", market.rate.to_string()),
        ("Volatility", market.volatility.to_string()),
    ]
}

/// Rows describing a Monte Carlo estimate.
pub(crate) fn simulation_rows(result: &SimulationResult) -> Vec<(&'static str, String)> {
    vec![
        ("Paths", result.n_paths.to_string()),
        ("Seed", result.seed.to_string()),
        ("Monte Carlo price", money(result.price)),
        ("Standard error", money(result.std_error)),
        ("Confidence level", format!("{}", result.confidence_level)),
        ("Interval lower", money(result.lower())),
        ("Interval upper", money(result.upper())),
    ]
}
