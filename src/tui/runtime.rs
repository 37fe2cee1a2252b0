//! TUI application state.

use crate::config::ScenarioConfig;
use crate::error::OutOfRangeError;
use crate::project::{CurvePoint, Parameter, ProjectInputs, ProjectMetrics, revenue_curve};
use crate::tariff::{TariffBand, TariffSchedule};

/// TUI application state.
///
/// The inputs are the only mutable state; metrics and curve are
/// recomputed from them after every change.
pub struct App {
    schedule: TariffSchedule,
    /// Scenario the sliders were loaded from (kept for reset).
    scenario: ScenarioConfig,
    /// Current slider values.
    pub inputs: ProjectInputs,
    /// Index into [`Parameter::ALL`] of the focused slider.
    pub selected: usize,
    /// Metrics of the current inputs.
    pub metrics: Result<ProjectMetrics, OutOfRangeError>,
    /// Revenue curve at the current yield.
    pub curve: Result<Vec<CurvePoint>, OutOfRangeError>,
    /// Name of the active preset or scenario file.
    pub preset_name: String,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates a new app from a preset name, falling back to the default
    /// scenario for unknown names.
    pub fn new(preset: &str) -> Self {
        let scenario = ScenarioConfig::from_preset(preset).unwrap_or_default();
        Self::from_scenario(preset, scenario)
    }

    /// Creates a new app from an already loaded scenario.
    pub fn from_scenario(name: &str, scenario: ScenarioConfig) -> Self {
        let schedule = TariffSchedule::default();
        let mut app = Self {
            metrics: ProjectMetrics::evaluate(&scenario.inputs(), &schedule),
            schedule,
            inputs: scenario.inputs(),
            scenario,
            selected: Parameter::ALL.len() - 1,
            curve: Ok(Vec::new()),
            preset_name: name.to_string(),
            quit: false,
        };
        app.load_inputs();
        app
    }

    /// Copies the scenario into the sliders and recomputes.
    fn load_inputs(&mut self) {
        let mut inputs = self.scenario.inputs();
        for p in Parameter::ALL {
            let value = p.get(&inputs);
            p.set(&mut inputs, value);
        }
        self.inputs = inputs;
        self.recompute();
    }

    /// Re-derives metrics and curve from the current inputs.
    fn recompute(&mut self) {
        self.metrics = ProjectMetrics::evaluate(&self.inputs, &self.schedule);
        self.curve = revenue_curve(
            &self.schedule,
            self.inputs.yield_kwh_per_kwc,
            &self.scenario.sweep(),
        );
    }

    /// Parameter of the focused slider.
    pub fn selected_parameter(&self) -> Parameter {
        Parameter::ALL[self.selected]
    }

    /// Moves focus to the next slider, wrapping around.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Parameter::ALL.len();
    }

    /// Moves focus to the previous slider, wrapping around.
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + Parameter::ALL.len() - 1) % Parameter::ALL.len();
    }

    /// Moves the focused slider by `steps` and recomputes.
    pub fn adjust(&mut self, steps: i32) {
        self.selected_parameter().nudge(&mut self.inputs, steps);
        self.recompute();
    }

    /// Switches to a different preset, resetting every slider.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(scenario) = ScenarioConfig::from_preset(name) else {
            return;
        };
        self.scenario = scenario;
        self.preset_name = name.to_string();
        self.load_inputs();
    }

    /// Restores the sliders of the current scenario.
    pub fn reset(&mut self) {
        self.load_inputs();
    }

    /// Band paying the current installed capacity.
    pub fn active_band(&self) -> Option<&TariffBand> {
        self.schedule.band_for(self.inputs.capacity_kwc).ok()
    }

    /// Label of the schedule in force.
    pub fn schedule_label(&self) -> &str {
        &self.schedule.label
    }

    /// Capacity range shown on the chart (kWc).
    pub fn chart_range(&self) -> [f64; 2] {
        let sweep = self.scenario.sweep();
        [sweep.min_kwc, sweep.max_kwc.max(sweep.min_kwc + 1.0)]
    }
}
