//! Revenue chart data: annual revenue over a sweep of capacities.

use serde::{Deserialize, Serialize};

use crate::error::OutOfRangeError;
use crate::tariff::TariffSchedule;

/// Most capacities a chart sweep may hold.
pub const MAX_SWEEP_POINTS: usize = 500;

/// Capacities swept for the revenue chart: `min_kwc..=max_kwc` by `step_kwc`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacitySweep {
    pub min_kwc: f64,
    pub max_kwc: f64,
    pub step_kwc: f64,
}

impl Default for CapacitySweep {
    fn default() -> Self {
        Self {
            min_kwc: 1.0,
            max_kwc: 500.0,
            step_kwc: 1.0,
        }
    }
}

impl CapacitySweep {
    /// Number of capacities in the sweep (0 for an empty or invalid range).
    ///
    /// Saturates instead of overflowing for vanishingly small steps; callers
    /// compare the result against [`MAX_SWEEP_POINTS`].
    pub fn len(&self) -> usize {
        if self.step_kwc.is_nan() || self.step_kwc <= 0.0 || self.max_kwc < self.min_kwc {
            return 0;
        }
        let intervals = ((self.max_kwc - self.min_kwc) / self.step_kwc + 1e-9).floor();
        if !intervals.is_finite() {
            return 0;
        }
        (intervals as usize).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swept capacities, computed as `min + i * step` and never past `max`.
    pub fn capacities(&self) -> impl Iterator<Item = f64> {
        let Self {
            min_kwc,
            max_kwc,
            step_kwc,
        } = *self;
        (0..self.len()).map(move |i| (min_kwc + i as f64 * step_kwc).min(max_kwc))
    }
}

/// One point of the revenue chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Installed capacity (kWc).
    pub capacity_kwc: f64,
    /// Energy produced per year (kWh).
    pub annual_production_kwh: f64,
    /// Yearly buyback revenue (€).
    pub annual_revenue: f64,
}

/// Annual revenue of every capacity in `sweep` at a given specific yield.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] for the first swept capacity not covered by
/// `schedule`.
pub fn revenue_curve(
    schedule: &TariffSchedule,
    yield_kwh_per_kwc: f64,
    sweep: &CapacitySweep,
) -> Result<Vec<CurvePoint>, OutOfRangeError> {
    sweep
        .capacities()
        .map(|capacity_kwc| -> Result<CurvePoint, OutOfRangeError> {
            let annual_production_kwh = capacity_kwc * yield_kwh_per_kwc;
            let annual_revenue = schedule.buyback_revenue(annual_production_kwh, capacity_kwc)?;
            Ok(CurvePoint {
                capacity_kwc,
                annual_production_kwh,
                annual_revenue,
            })
        })
        .collect()
}
