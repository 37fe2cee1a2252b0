//! The OA buyback schedule and band selection.

use serde::Serialize;
use tracing::trace;

use super::band::TariffBand;
use crate::error::OutOfRangeError;

/// Regulatory ceiling: no buyback for installations above this capacity (kWc).
pub const MAX_BUYBACK_KWC: f64 = 500.0;

/// Bands of the tariff order of 6 October 2021, smallest first.
pub const OA_2021_BANDS: [TariffBand; 5] = [
    TariffBand::flat(3.0, 0.2022),
    TariffBand::flat(9.0, 0.1718),
    TariffBand::flat(36.0, 0.1231),
    TariffBand::flat(100.0, 0.1070),
    TariffBand::degressive(MAX_BUYBACK_KWC, 0.1107, 1_100.0, 0.04),
];

/// An ordered buyback schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TariffSchedule {
    /// Regulation the bands come from.
    pub label: String,
    /// Bands in increasing order of `max_kwc`.
    pub bands: Vec<TariffBand>,
}

impl Default for TariffSchedule {
    fn default() -> Self {
        Self::oa_2021()
    }
}

impl TariffSchedule {
    /// Schedule of the tariff order of 6 October 2021 (up to 500 kWc).
    pub fn oa_2021() -> Self {
        Self {
            label: "OA tariff order of 2021-10-06".to_string(),
            bands: OA_2021_BANDS.to_vec(),
        }
    }

    /// Largest capacity eligible for buyback (kWc).
    pub fn max_kwc(&self) -> f64 {
        self.bands.last().map_or(0.0, |b| b.max_kwc)
    }

    /// Returns the band paying an installation of `installed_kwc`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the capacity is not positive or
    /// exceeds every band.
    pub fn band_for(&self, installed_kwc: f64) -> Result<&TariffBand, OutOfRangeError> {
        select(&self.bands, installed_kwc)
    }

    /// Annual buyback revenue (€) for `annual_kwh` produced by `installed_kwc`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if no band covers `installed_kwc`.
    pub fn buyback_revenue(
        &self,
        annual_kwh: f64,
        installed_kwc: f64,
    ) -> Result<f64, OutOfRangeError> {
        evaluate(&self.bands, annual_kwh, installed_kwc)
    }
}

fn select(bands: &[TariffBand], installed_kwc: f64) -> Result<&TariffBand, OutOfRangeError> {
    let out_of_range = OutOfRangeError { installed_kwc };
    if installed_kwc.is_nan() || installed_kwc <= 0.0 {
        return Err(out_of_range);
    }
    let band = bands
        .iter()
        .find(|b| b.covers(installed_kwc))
        .ok_or(out_of_range)?;
    trace!(installed_kwc, max_kwc = band.max_kwc, "tariff band selected");
    Ok(band)
}

pub(super) fn evaluate(
    bands: &[TariffBand],
    annual_kwh: f64,
    installed_kwc: f64,
) -> Result<f64, OutOfRangeError> {
    let band = select(bands, installed_kwc)?;
    Ok(band.rate.revenue(annual_kwh, installed_kwc))
}
