//! Snapshot of the user-tunable parameters and their slider ranges.

use serde::{Deserialize, Serialize};

use super::costs::CostModel;
use super::installation::Installation;
use crate::error::ConfigError;
use crate::tariff::MAX_BUYBACK_KWC;

/// Current value of every tunable parameter.
///
/// This is the only input of a project evaluation; front-ends rebuild the
/// snapshot on each interaction and recompute everything from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    /// Annual production per installed kWc (kWh/kWc).
    pub yield_kwh_per_kwc: f64,
    /// Installation cost per kWc, excluding VAT (€/kWc).
    pub cost_per_kwc: f64,
    /// Total grid connection cost (€).
    pub connection_cost: f64,
    /// Annual maintenance cost per kWc (€/kWc).
    pub maintenance_per_kwc: f64,
    /// Installed capacity (kWc).
    pub capacity_kwc: f64,
}

impl Default for ProjectInputs {
    fn default() -> Self {
        Self {
            yield_kwh_per_kwc: Parameter::Yield.range().default,
            cost_per_kwc: Parameter::CostPerKwc.range().default,
            connection_cost: Parameter::ConnectionCost.range().default,
            maintenance_per_kwc: Parameter::MaintenancePerKwc.range().default,
            capacity_kwc: Parameter::Capacity.range().default,
        }
    }
}

impl ProjectInputs {
    /// The physical installation described by this snapshot.
    pub fn installation(&self) -> Installation {
        Installation::new(self.capacity_kwc, self.yield_kwh_per_kwc)
    }

    /// The cost model described by this snapshot.
    pub fn costs(&self) -> CostModel {
        CostModel {
            cost_per_kwc: self.cost_per_kwc,
            connection_cost: self.connection_cost,
            maintenance_per_kwc: self.maintenance_per_kwc,
        }
    }

    /// Checks every parameter against its physical bounds.
    ///
    /// Errors are keyed by [`Parameter::key`]. Returns an empty vector if
    /// the snapshot can be evaluated.
    pub fn validate(&self) -> Vec<ConfigError> {
        Parameter::ALL
            .iter()
            .filter_map(|p| {
                let msg = p.check(p.get(self)).err()?;
                Some(ConfigError::new(p.key(), msg))
            })
            .collect()
    }
}

/// Bounds, granularity and default of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderRange {
    /// Clamps `value` into the range and rounds it to the nearest step.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

/// A tunable parameter of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Yield,
    CostPerKwc,
    ConnectionCost,
    MaintenancePerKwc,
    Capacity,
}

impl Parameter {
    /// All parameters, in display order.
    pub const ALL: [Self; 5] = [
        Self::Yield,
        Self::CostPerKwc,
        Self::ConnectionCost,
        Self::MaintenancePerKwc,
        Self::Capacity,
    ];

    /// Short human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yield => "Annual yield",
            Self::CostPerKwc => "Installation cost",
            Self::ConnectionCost => "Grid connection",
            Self::MaintenancePerKwc => "Maintenance",
            Self::Capacity => "Installed capacity",
        }
    }

    /// Field name used in query strings and serialized snapshots.
    pub fn key(self) -> &'static str {
        match self {
            Self::Yield => "yield_kwh_per_kwc",
            Self::CostPerKwc => "cost_per_kwc",
            Self::ConnectionCost => "connection_cost",
            Self::MaintenancePerKwc => "maintenance_per_kwc",
            Self::Capacity => "capacity_kwc",
        }
    }

    /// Unit of the parameter value.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Yield => "kWh/kWc/yr",
            Self::CostPerKwc => "€/kWc",
            Self::ConnectionCost => "€",
            Self::MaintenancePerKwc => "€/kWc/yr",
            Self::Capacity => "kWc",
        }
    }

    /// Slider range of the parameter.
    pub const fn range(self) -> SliderRange {
        match self {
            Self::Yield => SliderRange {
                min: 1_000.0,
                max: 1_800.0,
                step: 1.0,
                default: 1_529.0,
            },
            Self::CostPerKwc => SliderRange {
                min: 400.0,
                max: 1_000.0,
                step: 1.0,
                default: 800.0,
            },
            Self::ConnectionCost => SliderRange {
                min: 0.0,
                max: 30_000.0,
                step: 100.0,
                default: 10_000.0,
            },
            Self::MaintenancePerKwc => SliderRange {
                min: 0.0,
                max: 50.0,
                step: 1.0,
                default: 20.0,
            },
            Self::Capacity => SliderRange {
                min: 1.0,
                max: 500.0,
                step: 1.0,
                default: 100.0,
            },
        }
    }

    /// Checks `value` against the physical bounds of the parameter.
    ///
    /// These are wider than the slider range: only the capacity ceiling and
    /// sign constraints apply.
    pub fn check(self, value: f64) -> Result<(), String> {
        match self {
            Self::Capacity if !(value > 0.0 && value <= MAX_BUYBACK_KWC) => {
                Err(format!("must be in (0, {MAX_BUYBACK_KWC}], got {value}"))
            }
            Self::Yield if !(value.is_finite() && value > 0.0) => {
                Err(format!("must be > 0, got {value}"))
            }
            Self::CostPerKwc | Self::ConnectionCost | Self::MaintenancePerKwc
                if !(value.is_finite() && value >= 0.0) =>
            {
                Err(format!("must be >= 0, got {value}"))
            }
            _ => Ok(()),
        }
    }

    /// Reads the parameter from a snapshot.
    pub fn get(self, inputs: &ProjectInputs) -> f64 {
        match self {
            Self::Yield => inputs.yield_kwh_per_kwc,
            Self::CostPerKwc => inputs.cost_per_kwc,
            Self::ConnectionCost => inputs.connection_cost,
            Self::MaintenancePerKwc => inputs.maintenance_per_kwc,
            Self::Capacity => inputs.capacity_kwc,
        }
    }

    /// Writes `value` into the snapshot, snapped to the slider range.
    pub fn set(self, inputs: &mut ProjectInputs, value: f64) {
        let value = self.range().snap(value);
        let slot = match self {
            Self::Yield => &mut inputs.yield_kwh_per_kwc,
            Self::CostPerKwc => &mut inputs.cost_per_kwc,
            Self::ConnectionCost => &mut inputs.connection_cost,
            Self::MaintenancePerKwc => &mut inputs.maintenance_per_kwc,
            Self::Capacity => &mut inputs.capacity_kwc,
        };
        *slot = value;
    }

    /// Moves the parameter by `steps` slider steps (negative moves down).
    pub fn nudge(self, inputs: &mut ProjectInputs, steps: i32) {
        let current = self.get(inputs);
        self.set(inputs, current + f64::from(steps) * self.range().step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_slider_defaults() {
        let inputs = ProjectInputs::default();
        for p in Parameter::ALL {
            assert_eq!(p.get(&inputs), p.range().default, "{p:?}");
        }
    }

    #[test]
    fn defaults_lie_within_ranges() {
        for p in Parameter::ALL {
            let r = p.range();
            assert!(r.min <= r.default && r.default <= r.max, "{p:?}");
            assert!(r.step > 0.0);
        }
    }

    #[test]
    fn snap_clamps_and_rounds() {
        let r = Parameter::ConnectionCost.range();
        assert_eq!(r.snap(-50.0), 0.0);
        assert_eq!(r.snap(40_000.0), 30_000.0);
        assert_eq!(r.snap(1_249.0), 1_200.0);
        assert_eq!(r.snap(1_251.0), 1_300.0);
        assert_eq!(r.snap(f64::NAN), r.default);
    }

    #[test]
    fn nudge_moves_by_step_and_stays_in_range() {
        let mut inputs = ProjectInputs::default();
        Parameter::ConnectionCost.nudge(&mut inputs, 3);
        assert_eq!(inputs.connection_cost, 10_300.0);

        Parameter::Capacity.nudge(&mut inputs, 1_000);
        assert_eq!(inputs.capacity_kwc, 500.0);
        Parameter::Capacity.nudge(&mut inputs, -1_000);
        assert_eq!(inputs.capacity_kwc, 1.0);
    }

    #[test]
    fn default_snapshot_passes_checks() {
        assert!(ProjectInputs::default().validate().is_empty());
    }

    #[test]
    fn validate_rejects_negative_and_nan_costs() {
        let inputs = ProjectInputs {
            cost_per_kwc: -2_000.0,
            connection_cost: f64::NAN,
            ..ProjectInputs::default()
        };
        let fields: Vec<String> = inputs.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, ["cost_per_kwc", "connection_cost"]);
    }

    #[test]
    fn check_allows_values_beyond_slider_range() {
        assert!(Parameter::Yield.check(2_100.0).is_ok());
        assert!(Parameter::ConnectionCost.check(80_000.0).is_ok());
        assert!(Parameter::Capacity.check(500.0).is_ok());
        assert!(Parameter::Capacity.check(500.5).is_err());
        assert!(Parameter::Capacity.check(f64::NAN).is_err());
        assert!(Parameter::MaintenancePerKwc.check(f64::INFINITY).is_err());
    }

    #[test]
    fn set_touches_only_its_field() {
        let mut inputs = ProjectInputs::default();
        Parameter::MaintenancePerKwc.set(&mut inputs, 35.0);
        assert_eq!(inputs.maintenance_per_kwc, 35.0);
        assert_eq!(inputs.cost_per_kwc, 800.0);
        assert_eq!(inputs.capacity_kwc, 100.0);
    }
}
