//! oa-sim entry point: CLI wiring, report printing and front-end dispatch.

mod cli;

use std::process;

use oa_sim::config::ScenarioConfig;
use oa_sim::error::ConfigError;
use oa_sim::io::export::{export_cashflow_csv, export_curve_csv};
use oa_sim::project::{CashFlowProjection, ProjectMetrics, revenue_curve};
use oa_sim::tariff::TariffSchedule;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::CliOptions;

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the scenario: `--scenario` takes priority, then `--preset`.
///
/// Returns the display name alongside the configuration.
fn load_scenario(opts: &CliOptions) -> Result<(String, ScenarioConfig), ConfigError> {
    if let Some(ref path) = opts.scenario {
        let cfg = ScenarioConfig::from_toml_file(path)?;
        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
        return Ok((name, cfg));
    }
    let name = opts.preset.as_deref().unwrap_or("default");
    Ok((name.to_string(), ScenarioConfig::from_preset(name)?))
}

#[cfg(feature = "tui")]
fn run_tui(name: &str, scenario: ScenarioConfig) {
    if let Err(e) = oa_sim::tui::run(name, scenario) {
        eprintln!("error: TUI crashed: {e}");
        process::exit(1);
    }
}

#[cfg(not(feature = "tui"))]
fn run_tui(_name: &str, _scenario: ScenarioConfig) {
    eprintln!("error: --tui requires building with `--features tui`");
    process::exit(1);
}

#[cfg(feature = "api")]
fn run_server(scenario: ScenarioConfig, port: u16) {
    use std::net::SocketAddr;
    use std::sync::Arc;

    let state = Arc::new(oa_sim::api::AppState {
        schedule: TariffSchedule::default(),
        scenario,
    });
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(oa_sim::api::serve(state, addr)) {
        eprintln!("error: API server failed on {addr}: {e}");
        process::exit(1);
    }
}

#[cfg(not(feature = "api"))]
fn run_server(_scenario: ScenarioConfig, _port: u16) {
    eprintln!("error: --serve requires building with `--features api`");
    process::exit(1);
}

fn main() {
    let opts = cli::parse_args().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        cli::print_usage();
        process::exit(1);
    });
    if opts.help {
        cli::print_usage();
        return;
    }

    // The TUI owns the terminal; log lines would corrupt it
    if !opts.tui {
        init_logging();
    }

    let (name, mut scenario) = load_scenario(&opts).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if let Some(kwc) = opts.capacity_kwc {
        scenario.installation.capacity_kwc = kwc;
    }
    if let Some(y) = opts.yield_kwh_per_kwc {
        scenario.installation.yield_kwh_per_kwc = y;
    }

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    info!(scenario = %name, "scenario loaded");

    if opts.tui {
        run_tui(&name, scenario);
        return;
    }

    let schedule = TariffSchedule::default();
    let metrics = ProjectMetrics::evaluate(&scenario.inputs(), &schedule).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });
    let cash_flow = CashFlowProjection::from_metrics(&metrics, scenario.contract.years);

    println!("{metrics}");
    println!("\n{cash_flow}");

    if let Some(ref path) = opts.curve_out {
        let written = revenue_curve(
            &schedule,
            scenario.installation.yield_kwh_per_kwc,
            &scenario.sweep(),
        )
        .map_err(|e| e.to_string())
        .and_then(|points| export_curve_csv(&points, path).map_err(|e| e.to_string()));
        if let Err(e) = written {
            eprintln!("error: failed to write revenue curve: {e}");
            process::exit(1);
        }
        eprintln!("Revenue curve written to {}", path.display());
    }

    if let Some(ref path) = opts.cashflow_out {
        if let Err(e) = export_cashflow_csv(&cash_flow.years, path) {
            eprintln!("error: failed to write cash flow: {e}");
            process::exit(1);
        }
        eprintln!("Cash flow written to {}", path.display());
    }

    if opts.serve {
        run_server(scenario, opts.port);
    }
}
