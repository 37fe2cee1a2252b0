//! Buyback tariff under the French *obligation d'achat* (OA).
//!
//! The schedule is an ordered list of capacity bands evaluated top-down;
//! the first band whose upper bound covers the installed capacity supplies
//! the rate rule.

/// Capacity bands and their rate rules.
pub mod band;
/// The OA schedule and band selection.
pub mod schedule;

pub use band::{Rate, TariffBand};
pub use schedule::{MAX_BUYBACK_KWC, OA_2021_BANDS, TariffSchedule};

use crate::error::OutOfRangeError;

/// Annual buyback revenue (€) for `annual_kwh` produced by an installation
/// of `installed_kwc`, under the OA 2021 schedule.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `installed_kwc` is not in `(0, 500]`.
///
/// # Examples
///
/// ```
/// let revenue = oa_sim::tariff::buyback_revenue(250_000.0, 200.0).unwrap();
/// assert!((revenue - 25_554.0).abs() < 1e-6);
/// ```
pub fn buyback_revenue(annual_kwh: f64, installed_kwc: f64) -> Result<f64, OutOfRangeError> {
    schedule::evaluate(&OA_2021_BANDS, annual_kwh, installed_kwc)
}
