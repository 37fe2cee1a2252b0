//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use super::runtime::App;
use super::style;
use crate::project::{OA_CONTRACT_YEARS, Parameter};
use crate::tariff::Rate;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // chart
            Constraint::Length(Parameter::ALL.len() as u16 + 2), // sliders
            Constraint::Length(3), // metrics
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_chart(frame, app, chunks[1]);
    render_sliders(frame, app, chunks[2]);
    render_metrics(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Header bar: preset name and the tariff band of the current capacity.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let band = match app.active_band() {
        Some(b) => match b.rate {
            Rate::Flat { eur_per_kwh } => {
                format!("band <= {} kWc @ {eur_per_kwh:.4} €/kWh", b.max_kwc)
            }
            Rate::Degressive {
                eur_per_kwh,
                yield_cap_kwh_per_kwc,
                excess_eur_per_kwh,
            } => format!(
                "band <= {} kWc @ {eur_per_kwh:.4} €/kWh, {excess_eur_per_kwh:.2} beyond {yield_cap_kwh_per_kwc} kWh/kWc",
                b.max_kwc
            ),
        },
        None => "no buyback band".to_string(),
    };

    let header = Line::from(vec![
        Span::styled(
            " OA-SIM ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" │ {band} │ {} ", app.schedule_label())),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Annual revenue against installed capacity, current capacity marked.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Annual revenue (€/yr) by installed capacity ")
        .borders(Borders::ALL);
    let curve = match &app.curve {
        Ok(points) => points,
        Err(e) => {
            let msg = Paragraph::new(Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(style::NOT_AMORTIZED),
            )))
            .block(block);
            frame.render_widget(msg, area);
            return;
        }
    };

    let curve_data: Vec<(f64, f64)> = curve
        .iter()
        .map(|p| (p.capacity_kwc, p.annual_revenue))
        .collect();

    let marker_data: Vec<(f64, f64)> = app
        .metrics
        .as_ref()
        .map(|m| vec![(m.capacity_kwc, m.annual_revenue)])
        .unwrap_or_default();

    let [x_lo, x_hi] = app.chart_range();
    let y_bounds = style::auto_bounds_y(&curve_data);

    let datasets = vec![
        Dataset::default()
            .name("Revenue")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::CURVE_COLOR))
            .data(&curve_data),
        Dataset::default()
            .name("Current")
            .marker(symbols::Marker::Block)
            .style(Style::default().fg(style::MARKER_COLOR))
            .data(&marker_data),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("kWc")
                .bounds([x_lo, x_hi])
                .labels(vec![format!("{x_lo:.0}"), format!("{x_hi:.0}")]),
        )
        .y_axis(
            Axis::default()
                .title("€")
                .bounds(y_bounds)
                .labels(vec![
                    format!("{:.0}", y_bounds[0]),
                    format!("{:.0}", y_bounds[1]),
                ]),
        );

    frame.render_widget(chart, area);
}

/// One line per parameter: label, bar, value.
fn render_sliders(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = Parameter::ALL
        .iter()
        .enumerate()
        .map(|(idx, &p)| {
            let range = p.range();
            let value = p.get(&app.inputs);
            let filled = style::filled_cells((value - range.min) / (range.max - range.min));
            let selected = idx == app.selected;

            let label_style = if selected {
                Style::default()
                    .fg(style::SELECTED_FG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{} {:<20}", if selected { "▶" } else { " " }, p.label()),
                    label_style,
                ),
                Span::styled("█".repeat(filled), Style::default().fg(style::BAR_FILLED)),
                Span::styled(
                    "░".repeat(style::BAR_WIDTH - filled),
                    Style::default().fg(style::FOOTER_FG),
                ),
                Span::styled(format!(" {value:>8.0} {}", p.unit()), label_style),
            ])
        })
        .collect();

    let block = Block::default().title(" Parameters ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The four headline metrics side by side.
fn render_metrics(frame: &mut Frame, app: &App, area: Rect) {
    let metrics = match &app.metrics {
        Ok(m) => m,
        Err(e) => {
            let block = Block::default().title(" Metrics ").borders(Borders::ALL);
            let msg = Paragraph::new(Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(style::NOT_AMORTIZED),
            )))
            .block(block);
            frame.render_widget(msg, area);
            return;
        }
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let amortization_color = match metrics.amortization.as_years() {
        Some(y) if y <= f64::from(OA_CONTRACT_YEARS) => style::AMORTIZED,
        _ => style::NOT_AMORTIZED,
    };

    let cells = [
        (
            " Total cost ",
            format!("{:.0} €", metrics.installation_cost),
            Style::default(),
        ),
        (
            " Annual maintenance ",
            format!("{:.0} €", metrics.annual_maintenance_cost),
            Style::default(),
        ),
        (
            " Annual revenue ",
            format!("{:.0} €", metrics.annual_revenue),
            Style::default(),
        ),
        (
            " Amortization ",
            metrics.amortization.to_string(),
            Style::default()
                .fg(amortization_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for ((title, value, value_style), column) in cells.into_iter().zip(columns.iter()) {
        let widget = Paragraph::new(Line::from(Span::styled(value, value_style)))
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(widget, *column);
    }
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ↑/↓:Select  ←/→:Adjust  PgUp/PgDn:×10  1/2/3:Preset  r:Reset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
