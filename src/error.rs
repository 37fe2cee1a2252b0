//! Error types for tariff evaluation and scenario configuration.

use thiserror::Error;

use crate::tariff::MAX_BUYBACK_KWC;

/// Installed capacity outside the range covered by the buyback schedule.
///
/// The legal range is `(0, 500]` kWc. Raised by every operation that
/// evaluates the tariff and propagated unchanged to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{}", describe(.installed_kwc))]
pub struct OutOfRangeError {
    /// The offending capacity (kWc).
    pub installed_kwc: f64,
}

fn describe(installed_kwc: &f64) -> String {
    let installed_kwc = *installed_kwc;
    if installed_kwc > MAX_BUYBACK_KWC {
        format!("no buyback beyond {MAX_BUYBACK_KWC} kWc installed (got {installed_kwc} kWc)")
    } else {
        format!("installed capacity must be positive (got {installed_kwc} kWc)")
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"installation.capacity_kwc"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
