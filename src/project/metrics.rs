//! Derived project figures and the amortization period.

use std::fmt;

use tracing::{debug, warn};

use super::inputs::ProjectInputs;
use crate::error::OutOfRangeError;
use crate::tariff::TariffSchedule;

/// Years needed for cumulative net revenue to cover the installation cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amortization {
    /// Paid back after this many years.
    Years(f64),
    /// Net annual revenue is zero or negative; the cost is never recovered.
    NotAmortizable,
}

impl Amortization {
    /// `installation_cost / net_annual_revenue`, or
    /// [`Amortization::NotAmortizable`] when the net revenue is not positive.
    pub fn from_costs(installation_cost: f64, net_annual_revenue: f64) -> Self {
        if net_annual_revenue.is_nan() || net_annual_revenue <= 0.0 {
            return Self::NotAmortizable;
        }
        let years = installation_cost / net_annual_revenue;
        if years.is_finite() {
            Self::Years(years)
        } else {
            Self::NotAmortizable
        }
    }

    /// Amortization period in years; `f64::INFINITY` when not amortizable.
    pub fn years(&self) -> f64 {
        match *self {
            Self::Years(y) => y,
            Self::NotAmortizable => f64::INFINITY,
        }
    }

    /// Amortization period in years, `None` when not amortizable.
    pub fn as_years(&self) -> Option<f64> {
        match *self {
            Self::Years(y) => Some(y),
            Self::NotAmortizable => None,
        }
    }

    pub fn is_amortizable(&self) -> bool {
        matches!(self, Self::Years(_))
    }
}

impl fmt::Display for Amortization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(y) => write!(f, "{y:.1} years"),
            Self::NotAmortizable => write!(f, "not amortizable"),
        }
    }
}

/// Everything displayed for a project, derived from one input snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectMetrics {
    /// Installed capacity (kWc).
    pub capacity_kwc: f64,
    /// Panel surface (m²).
    pub surface_m2: f64,
    /// Energy produced per year (kWh).
    pub annual_production_kwh: f64,
    /// Up-front cost including grid connection (€).
    pub installation_cost: f64,
    /// Yearly maintenance cost (€).
    pub annual_maintenance_cost: f64,
    /// Yearly buyback revenue (€).
    pub annual_revenue: f64,
    /// Payback period.
    pub amortization: Amortization,
    /// Capacity is above the extra-permits threshold.
    pub needs_extra_permits: bool,
}

impl ProjectMetrics {
    /// Computes all metrics from the current inputs.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the installed capacity is not eligible
    /// for buyback under `schedule`.
    pub fn evaluate(
        inputs: &ProjectInputs,
        schedule: &TariffSchedule,
    ) -> Result<Self, OutOfRangeError> {
        let installation = inputs.installation();
        let costs = inputs.costs();
        let capacity_kwc = installation.capacity_kwc;

        let annual_production_kwh = installation.annual_production_kwh();
        let annual_revenue = schedule.buyback_revenue(annual_production_kwh, capacity_kwc)?;
        let installation_cost = costs.installation_cost(capacity_kwc);
        let annual_maintenance_cost = costs.annual_maintenance_cost(capacity_kwc);
        let amortization =
            Amortization::from_costs(installation_cost, annual_revenue - annual_maintenance_cost);

        debug!(
            capacity_kwc,
            annual_production_kwh, annual_revenue, installation_cost, "project evaluated"
        );
        if !amortization.is_amortizable() {
            warn!(
                annual_revenue,
                annual_maintenance_cost, "maintenance exceeds revenue, project never pays back"
            );
        }

        Ok(Self {
            capacity_kwc,
            surface_m2: installation.surface_m2(),
            annual_production_kwh,
            installation_cost,
            annual_maintenance_cost,
            annual_revenue,
            amortization,
            needs_extra_permits: installation.needs_extra_permits(),
        })
    }

    /// Revenue left after maintenance each year (€).
    pub fn net_annual_revenue(&self) -> f64 {
        self.annual_revenue - self.annual_maintenance_cost
    }
}

impl fmt::Display for ProjectMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Project Report ---")?;
        writeln!(
            f,
            "Installed capacity:    {:.0} kWc ({:.0} m²)",
            self.capacity_kwc, self.surface_m2
        )?;
        writeln!(f, "Annual production:     {:.0} kWh", self.annual_production_kwh)?;
        writeln!(f, "Installation cost:     {:.0} €", self.installation_cost)?;
        writeln!(f, "Annual maintenance:    {:.0} €", self.annual_maintenance_cost)?;
        writeln!(f, "Annual revenue:        {:.2} €", self.annual_revenue)?;
        write!(f, "Amortization:          {}", self.amortization)?;
        if self.needs_extra_permits {
            write!(f, "\nNote: above 250 kWc, extra administrative procedures apply")?;
        }
        Ok(())
    }
}
