//! CSV export for revenue curves and cash-flow projections.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::project::{CashFlowYear, CurvePoint};

/// Column header of the revenue curve export.
const CURVE_HEADER: [&str; 3] = ["capacity_kwc", "annual_production_kwh", "annual_revenue_eur"];

/// Column header of the cash-flow export.
const CASHFLOW_HEADER: [&str; 2] = ["year", "cumulative_balance_eur"];

/// Exports a revenue curve to a CSV file at the given path.
///
/// # Arguments
///
/// * `points` - Chart points, in sweep order
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_curve_csv(points: &[CurvePoint], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_curve_csv(points, io::BufWriter::new(file))
}

/// Writes a revenue curve as CSV to any writer.
///
/// One row per capacity, in sweep order. Produces deterministic output for
/// identical inputs.
///
/// # Arguments
///
/// * `points` - Chart points, in sweep order
/// * `writer` - Destination implementing `Write`
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_curve_csv(points: &[CurvePoint], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(CURVE_HEADER)?;
    for p in points {
        wtr.write_record(&[
            format!("{:.3}", p.capacity_kwc),
            format!("{:.1}", p.annual_production_kwh),
            format!("{:.2}", p.annual_revenue),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Exports a cash-flow projection to a CSV file at the given path.
///
/// # Arguments
///
/// * `years` - Cumulative balance of each contract year
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_cashflow_csv(years: &[CashFlowYear], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_cashflow_csv(years, io::BufWriter::new(file))
}

/// Writes a cash-flow projection as CSV to any writer.
///
/// # Arguments
///
/// * `years` - Cumulative balance of each contract year
/// * `writer` - Destination implementing `Write`
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_cashflow_csv(years: &[CashFlowYear], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(CASHFLOW_HEADER)?;
    for y in years {
        wtr.write_record(&[y.year.to_string(), format!("{:.2}", y.cumulative_balance)])?;
    }
    wtr.flush()?;
    Ok(())
}
