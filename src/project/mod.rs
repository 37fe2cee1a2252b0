//! Installation sizing: inputs, derived costs, amortization and the
//! revenue curve.
//!
//! All values are recomputed from a [`ProjectInputs`] snapshot; nothing is
//! retained between evaluations.

/// Cumulative cash flow over the buyback contract.
pub mod cashflow;
pub mod costs;
/// Revenue as a function of installed capacity.
pub mod curve;
pub mod inputs;
pub mod installation;
/// Derived project metrics and amortization.
pub mod metrics;

pub use cashflow::{CashFlowProjection, CashFlowYear, OA_CONTRACT_YEARS};
pub use costs::CostModel;
pub use curve::{CapacitySweep, CurvePoint, MAX_SWEEP_POINTS, revenue_curve};
pub use inputs::{Parameter, ProjectInputs, SliderRange};
pub use installation::Installation;
pub use metrics::{Amortization, ProjectMetrics};
