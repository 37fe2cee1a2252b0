//! Financial simulator for solar installations sold under the French
//! buyback obligation (OA).

/// REST API over the calculator.
#[cfg(feature = "api")]
pub mod api;
/// Scenario files and presets.
pub mod config;
pub mod error;
pub mod io;
pub mod project;
pub mod tariff;
/// Interactive slider UI.
#[cfg(feature = "tui")]
pub mod tui;
