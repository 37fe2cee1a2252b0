//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

/// Revenue curve line color.
pub const CURVE_COLOR: Color = Color::Cyan;
/// Current capacity marker color.
pub const MARKER_COLOR: Color = Color::Yellow;
/// Focused slider color.
pub const SELECTED_FG: Color = Color::Yellow;
/// Filled part of a slider bar.
pub const BAR_FILLED: Color = Color::Green;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Amortization shorter than the contract term.
pub const AMORTIZED: Color = Color::Green;
/// Amortization longer than the contract term, or never.
pub const NOT_AMORTIZED: Color = Color::Red;

/// Width of a slider bar in cells.
pub const BAR_WIDTH: usize = 30;

/// Computes Y-axis bounds from chart data points, anchored at zero, with
/// 10% headroom.
pub fn auto_bounds_y(points: &[(f64, f64)]) -> [f64; 2] {
    let max = points.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return [0.0, 1.0];
    }
    [0.0, max * 1.1]
}

/// Number of filled cells for a slider at `fraction` of its range.
pub fn filled_cells(fraction: f64) -> usize {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    (fraction * BAR_WIDTH as f64).round() as usize
}
