//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use oa_sim::config::ScenarioConfig;
use oa_sim::project::{ProjectInputs, ProjectMetrics};
use oa_sim::tariff::TariffSchedule;

/// Default input snapshot: 100 kWc at 1529 kWh/kWc, 800 €/kWc, 10 000 € connection
/// and 20 €/kWc/yr maintenance.
pub fn default_inputs() -> ProjectInputs {
    ScenarioConfig::default_scenario().inputs()
}

/// Inputs of the default snapshot at another installed capacity.
pub fn inputs_at(capacity_kwc: f64) -> ProjectInputs {
    ProjectInputs {
        capacity_kwc,
        ..default_inputs()
    }
}

/// Evaluates `inputs` under the OA 2021 schedule.
pub fn evaluate(inputs: &ProjectInputs) -> ProjectMetrics {
    ProjectMetrics::evaluate(inputs, &TariffSchedule::default())
        .expect("capacity should be within the buyback range")
}

/// Asserts `actual` is within `1e-6` of `expected`.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
