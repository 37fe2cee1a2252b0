//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::project::{
    CapacitySweep, MAX_SWEEP_POINTS, OA_CONTRACT_YEARS, Parameter, ProjectInputs,
};
use crate::tariff::MAX_BUYBACK_KWC;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the default scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::default_scenario`] for the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Installed capacity and site yield.
    #[serde(default)]
    pub installation: InstallationConfig,
    /// Installation and maintenance costs.
    #[serde(default)]
    pub costs: CostsConfig,
    /// Capacity range of the revenue chart.
    #[serde(default)]
    pub chart: ChartConfig,
    /// Buyback contract parameters.
    #[serde(default)]
    pub contract: ContractConfig,
}

/// Installed capacity and site yield.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallationConfig {
    /// Installed capacity (kWc, in (0, 500]).
    pub capacity_kwc: f64,
    /// Annual production per kWc at the site (kWh/kWc, > 0).
    pub yield_kwh_per_kwc: f64,
}

impl Default for InstallationConfig {
    fn default() -> Self {
        Self {
            capacity_kwc: Parameter::Capacity.range().default,
            yield_kwh_per_kwc: Parameter::Yield.range().default,
        }
    }
}

/// Installation and maintenance costs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostsConfig {
    /// Installation cost per kWc, excluding VAT (€/kWc).
    pub cost_per_kwc: f64,
    /// Total grid connection cost (€).
    pub connection_cost: f64,
    /// Annual maintenance cost per kWc (€/kWc).
    pub maintenance_per_kwc: f64,
}

impl Default for CostsConfig {
    fn default() -> Self {
        Self {
            cost_per_kwc: Parameter::CostPerKwc.range().default,
            connection_cost: Parameter::ConnectionCost.range().default,
            maintenance_per_kwc: Parameter::MaintenancePerKwc.range().default,
        }
    }
}

/// Capacity range of the revenue chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// First swept capacity (kWc).
    pub min_kwc: f64,
    /// Last swept capacity (kWc, at most 500).
    pub max_kwc: f64,
    /// Sweep step (kWc).
    pub step_kwc: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let sweep = CapacitySweep::default();
        Self {
            min_kwc: sweep.min_kwc,
            max_kwc: sweep.max_kwc,
            step_kwc: sweep.step_kwc,
        }
    }
}

/// Buyback contract parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractConfig {
    /// Contract term used for the cash-flow projection (years).
    pub years: u32,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            years: OA_CONTRACT_YEARS,
        }
    }
}

impl ScenarioConfig {
    /// Returns the default scenario (100 kWc at 1529 kWh/kWc).
    pub fn default_scenario() -> Self {
        Self::default()
    }

    /// Returns the Toulouse preset (PVGIS estimate of 1320 kWh/kWc).
    pub fn toulouse() -> Self {
        Self {
            installation: InstallationConfig {
                yield_kwh_per_kwc: 1_320.0,
                ..InstallationConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the Jonquières-Saint-Vincent preset (PVGIS estimate of
    /// 1539 kWh/kWc), sized at the 500 kWc ceiling.
    pub fn jonquieres() -> Self {
        Self {
            installation: InstallationConfig {
                capacity_kwc: 500.0,
                yield_kwh_per_kwc: 1_539.0,
            },
            costs: CostsConfig {
                connection_cost: 25_000.0,
                ..CostsConfig::default()
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["default", "toulouse", "jonquieres"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Self::default_scenario()),
            "toulouse" => Ok(Self::toulouse()),
            "jonquieres" => Ok(Self::jonquieres()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Input snapshot described by this scenario.
    pub fn inputs(&self) -> ProjectInputs {
        ProjectInputs {
            yield_kwh_per_kwc: self.installation.yield_kwh_per_kwc,
            cost_per_kwc: self.costs.cost_per_kwc,
            connection_cost: self.costs.connection_cost,
            maintenance_per_kwc: self.costs.maintenance_per_kwc,
            capacity_kwc: self.installation.capacity_kwc,
        }
    }

    /// Capacity sweep of the revenue chart.
    pub fn sweep(&self) -> CapacitySweep {
        CapacitySweep {
            min_kwc: self.chart.min_kwc,
            max_kwc: self.chart.max_kwc,
            step_kwc: self.chart.step_kwc,
        }
    }

    /// Dotted TOML path of a parameter.
    fn field_path(p: Parameter) -> &'static str {
        match p {
            Parameter::Yield => "installation.yield_kwh_per_kwc",
            Parameter::Capacity => "installation.capacity_kwc",
            Parameter::CostPerKwc => "costs.cost_per_kwc",
            Parameter::ConnectionCost => "costs.connection_cost",
            Parameter::MaintenancePerKwc => "costs.maintenance_per_kwc",
        }
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let inputs = self.inputs();
        for p in Parameter::ALL {
            if let Err(msg) = p.check(p.get(&inputs)) {
                errors.push(ConfigError::new(Self::field_path(p), msg));
            }
        }

        let ch = &self.chart;
        if ch.min_kwc.is_nan() || ch.min_kwc <= 0.0 {
            errors.push(ConfigError::new("chart.min_kwc", "must be > 0"));
        }
        if ch.max_kwc.is_nan() || ch.max_kwc > MAX_BUYBACK_KWC {
            errors.push(ConfigError::new(
                "chart.max_kwc",
                format!("must be <= {MAX_BUYBACK_KWC}"),
            ));
        }
        if ch.min_kwc > ch.max_kwc {
            errors.push(ConfigError::new("chart.min_kwc", "must be <= chart.max_kwc"));
        }
        if ch.step_kwc.is_nan() || ch.step_kwc <= 0.0 {
            errors.push(ConfigError::new("chart.step_kwc", "must be > 0"));
        }
        let chart_errors = errors.iter().any(|e| e.field.starts_with("chart."));
        if !chart_errors {
            let points = self.sweep().len();
            if points == 0 || points > MAX_SWEEP_POINTS {
                errors.push(ConfigError::new(
                    "chart.step_kwc",
                    format!("sweep must hold at most {MAX_SWEEP_POINTS} capacities"),
                ));
            }
        }

        if self.contract.years == 0 {
            errors.push(ConfigError::new("contract.years", "must be > 0"));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_valid() {
        let cfg = ScenarioConfig::default_scenario();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "default should be valid: {errors:?}");
    }

    #[test]
    fn default_inputs_match_slider_defaults() {
        assert_eq!(ScenarioConfig::default().inputs(), ProjectInputs::default());
    }

    #[test]
    fn from_preset_unknown() {
        let err = ScenarioConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn toulouse_has_lower_yield() {
        let base = ScenarioConfig::default_scenario();
        let toulouse = ScenarioConfig::toulouse();
        assert!(toulouse.installation.yield_kwh_per_kwc < base.installation.yield_kwh_per_kwc);
        assert_eq!(toulouse.installation.yield_kwh_per_kwc, 1_320.0);
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[installation]
capacity_kwc = 250.0
yield_kwh_per_kwc = 1400.0

[costs]
cost_per_kwc = 750.0
connection_cost = 15000.0
maintenance_per_kwc = 18.0

[chart]
min_kwc = 10.0
max_kwc = 400.0
step_kwc = 10.0

[contract]
years = 25
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.installation.capacity_kwc), Some(250.0));
        assert_eq!(cfg.as_ref().map(|c| c.costs.connection_cost), Some(15_000.0));
        assert_eq!(cfg.as_ref().map(|c| c.sweep().len()), Some(40));
        assert_eq!(cfg.as_ref().map(|c| c.contract.years), Some(25));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[installation]
capacity_kwc = 50.0
bogus_field = true
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[costs]
cost_per_kwc = 650.0
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        // overridden
        assert_eq!(cfg.as_ref().map(|c| c.costs.cost_per_kwc), Some(650.0));
        // kept default
        assert_eq!(cfg.as_ref().map(|c| c.costs.connection_cost), Some(10_000.0));
        assert_eq!(cfg.as_ref().map(|c| c.installation.capacity_kwc), Some(100.0));
    }

    #[test]
    fn validation_catches_capacity_above_ceiling() {
        let mut cfg = ScenarioConfig::default();
        cfg.installation.capacity_kwc = 501.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "installation.capacity_kwc"));
    }

    #[test]
    fn validation_catches_zero_capacity() {
        let mut cfg = ScenarioConfig::default();
        cfg.installation.capacity_kwc = 0.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "installation.capacity_kwc"));
    }

    #[test]
    fn validation_catches_negative_cost() {
        let mut cfg = ScenarioConfig::default();
        cfg.costs.maintenance_per_kwc = -1.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "costs.maintenance_per_kwc"));
    }

    #[test]
    fn validation_catches_chart_past_ceiling() {
        let mut cfg = ScenarioConfig::default();
        cfg.chart.max_kwc = 600.0;
        cfg.chart.step_kwc = 0.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "chart.max_kwc"));
        assert!(errors.iter().any(|e| e.field == "chart.step_kwc"));
    }

    #[test]
    fn validation_rejects_over_dense_chart() {
        for step in ["1e-300", "1e-6", "0.1"] {
            let cfg = ScenarioConfig::from_toml_str(&format!("[chart]\nstep_kwc = {step}\n"));
            let errors = cfg.map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.iter().any(|e| e.field == "chart.step_kwc"),
                "step {step} should be rejected: {errors:?}"
            );
        }
    }

    #[test]
    fn validation_accepts_chart_of_exactly_500_points() {
        let cfg = ScenarioConfig::default();
        assert_eq!(cfg.sweep().len(), MAX_SWEEP_POINTS);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn validated_decimal_chart_stays_under_ceiling() {
        let toml = "[chart]\nmin_kwc = 0.6\nmax_kwc = 500.0\nstep_kwc = 1.1\n";
        let cfg = ScenarioConfig::from_toml_str(toml).unwrap_or_default();
        assert!(cfg.validate().is_empty());
        assert_eq!(cfg.sweep().len(), 455);
        let curve = crate::project::revenue_curve(
            &crate::tariff::TariffSchedule::default(),
            cfg.installation.yield_kwh_per_kwc,
            &cfg.sweep(),
        );
        assert!(curve.is_ok(), "{:?}", curve.as_ref().err());
        let last = curve.ok().and_then(|c| c.last().map(|p| p.capacity_kwc));
        assert_eq!(last, Some(500.0));
    }

    #[test]
    fn validation_catches_zero_contract_years() {
        let mut cfg = ScenarioConfig::default();
        cfg.contract.years = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "contract.years"));
    }
}
