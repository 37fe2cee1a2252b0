//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::project::{CashFlowProjection, ProjectInputs, ProjectMetrics};

/// `GET /revenue` query: both fields required.
#[derive(Debug, Deserialize)]
pub struct RevenueQuery {
    /// Annual production (kWh).
    pub annual_kwh: f64,
    /// Installed capacity (kWc).
    pub installed_kwc: f64,
}

/// `GET /revenue` response.
#[derive(Debug, Serialize)]
pub struct RevenueResponse {
    pub annual_kwh: f64,
    pub installed_kwc: f64,
    /// Yearly buyback revenue (€).
    pub annual_revenue: f64,
}

/// `GET /metrics` query. Omitted fields are taken from the scenario.
#[derive(Debug, Default, Deserialize)]
pub struct MetricsQuery {
    pub yield_kwh_per_kwc: Option<f64>,
    pub cost_per_kwc: Option<f64>,
    pub connection_cost: Option<f64>,
    pub maintenance_per_kwc: Option<f64>,
    pub capacity_kwc: Option<f64>,
}

impl MetricsQuery {
    /// Overlays the provided fields on `base`.
    pub fn apply(&self, base: ProjectInputs) -> ProjectInputs {
        ProjectInputs {
            yield_kwh_per_kwc: self.yield_kwh_per_kwc.unwrap_or(base.yield_kwh_per_kwc),
            cost_per_kwc: self.cost_per_kwc.unwrap_or(base.cost_per_kwc),
            connection_cost: self.connection_cost.unwrap_or(base.connection_cost),
            maintenance_per_kwc: self.maintenance_per_kwc.unwrap_or(base.maintenance_per_kwc),
            capacity_kwc: self.capacity_kwc.unwrap_or(base.capacity_kwc),
        }
    }
}

/// `GET /metrics` response.
///
/// `amortization_years` is `null` when the project is not amortizable.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    /// Inputs the metrics were computed from.
    pub inputs: ProjectInputs,
    pub surface_m2: f64,
    pub annual_production_kwh: f64,
    pub installation_cost: f64,
    pub annual_maintenance_cost: f64,
    pub annual_revenue: f64,
    pub amortization_years: Option<f64>,
    pub needs_extra_permits: bool,
    /// First contract year with a non-negative cumulative balance.
    pub break_even_year: Option<u32>,
    /// Cumulative balance at the end of the contract (€).
    pub balance_at_term: f64,
}

impl MetricsResponse {
    pub fn new(inputs: ProjectInputs, m: &ProjectMetrics, cash_flow: &CashFlowProjection) -> Self {
        Self {
            inputs,
            surface_m2: m.surface_m2,
            annual_production_kwh: m.annual_production_kwh,
            installation_cost: m.installation_cost,
            annual_maintenance_cost: m.annual_maintenance_cost,
            annual_revenue: m.annual_revenue,
            amortization_years: m.amortization.as_years(),
            needs_extra_permits: m.needs_extra_permits,
            break_even_year: cash_flow.break_even_year(),
            balance_at_term: cash_flow.final_balance(),
        }
    }
}

/// `GET /curve` query.
#[derive(Debug, Deserialize)]
pub struct CurveQuery {
    /// Specific yield (kWh/kWc); defaults to the scenario's.
    pub yield_kwh_per_kwc: Option<f64>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
