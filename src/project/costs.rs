//! Installation and maintenance cost model.

/// Costs proportional to installed capacity, plus a fixed connection fee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    /// Installation cost per kWc, excluding VAT (€/kWc).
    pub cost_per_kwc: f64,
    /// Total grid connection cost (€).
    pub connection_cost: f64,
    /// Annual maintenance cost per kWc (€/kWc).
    pub maintenance_per_kwc: f64,
}

impl CostModel {
    /// Up-front cost of an installation of `capacity_kwc` (€).
    pub fn installation_cost(&self, capacity_kwc: f64) -> f64 {
        self.cost_per_kwc * capacity_kwc + self.connection_cost
    }

    /// Yearly maintenance cost of an installation of `capacity_kwc` (€).
    pub fn annual_maintenance_cost(&self, capacity_kwc: f64) -> f64 {
        self.maintenance_per_kwc * capacity_kwc
    }
}
