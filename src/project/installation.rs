//! Physical description of a solar installation.

/// Approximate panel area per installed kWc (m²).
pub const SURFACE_M2_PER_KWC: f64 = 5.0;

/// Above this capacity, ground installations need extra administrative
/// procedures (kWc).
pub const EXTRA_PERMITS_ABOVE_KWC: f64 = 250.0;

/// Installed capacity and the production it yields per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Installation {
    /// Nameplate capacity (kWc).
    pub capacity_kwc: f64,
    /// Specific yield at the site (kWh/kWc/year).
    pub yield_kwh_per_kwc: f64,
}

impl Installation {
    pub fn new(capacity_kwc: f64, yield_kwh_per_kwc: f64) -> Self {
        Self {
            capacity_kwc,
            yield_kwh_per_kwc,
        }
    }

    /// Energy produced per year (kWh).
    pub fn annual_production_kwh(&self) -> f64 {
        self.capacity_kwc * self.yield_kwh_per_kwc
    }

    /// Panel surface (m²).
    pub fn surface_m2(&self) -> f64 {
        self.capacity_kwc * SURFACE_M2_PER_KWC
    }

    pub fn needs_extra_permits(&self) -> bool {
        self.capacity_kwc > EXTRA_PERMITS_ABOVE_KWC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_is_capacity_times_yield() {
        let inst = Installation::new(100.0, 1_529.0);
        assert_eq!(inst.annual_production_kwh(), 152_900.0);
    }

    #[test]
    fn surface_uses_five_m2_per_kwc() {
        assert_eq!(Installation::new(36.0, 1_300.0).surface_m2(), 180.0);
    }

    #[test]
    fn extra_permits_strictly_above_threshold() {
        assert!(!Installation::new(250.0, 1_300.0).needs_extra_permits());
        assert!(Installation::new(251.0, 1_300.0).needs_extra_permits());
    }
}
