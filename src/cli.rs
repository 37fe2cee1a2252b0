//! Command-line argument parsing.

use std::env;
use std::path::PathBuf;

/// Parsed CLI arguments.
#[derive(Debug)]
pub struct CliOptions {
    pub scenario: Option<PathBuf>,
    pub preset: Option<String>,
    pub capacity_kwc: Option<f64>,
    pub yield_kwh_per_kwc: Option<f64>,
    pub curve_out: Option<PathBuf>,
    pub cashflow_out: Option<PathBuf>,
    pub tui: bool,
    pub serve: bool,
    pub port: u16,
    pub help: bool,
}

pub fn parse_args() -> Result<CliOptions, String> {
    parse_args_from(env::args().skip(1).collect())
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut opts = CliOptions {
        scenario: None,
        preset: None,
        capacity_kwc: None,
        yield_kwh_per_kwc: None,
        curve_out: None,
        cashflow_out: None,
        tui: false,
        serve: false,
        port: 3000,
        help: false,
    };

    while i < args.len() {
        match args[i].as_str() {
            "--scenario" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --scenario (expected a TOML file path)",
                )?;
                if opts.scenario.replace(PathBuf::from(path)).is_some() {
                    return Err("--scenario provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name =
                    args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--capacity" => {
                i += 1;
                let raw =
                    args.next_or_err(i, "missing value for --capacity (expected kWc)")?;
                opts.capacity_kwc = Some(parse_number("--capacity", raw)?);
            }
            "--yield" => {
                i += 1;
                let raw =
                    args.next_or_err(i, "missing value for --yield (expected kWh/kWc)")?;
                opts.yield_kwh_per_kwc = Some(parse_number("--yield", raw)?);
            }
            "--curve-out" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --curve-out (expected a file path)")?;
                opts.curve_out = Some(PathBuf::from(path));
            }
            "--cashflow-out" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --cashflow-out (expected a file path)")?;
                opts.cashflow_out = Some(PathBuf::from(path));
            }
            "--tui" => opts.tui = true,
            "--serve" => opts.serve = true,
            "--port" => {
                i += 1;
                let raw =
                    args.next_or_err(i, "missing value for --port (expected a u16)")?;
                opts.port = raw
                    .parse()
                    .map_err(|_| format!("--port value \"{raw}\" is not a valid u16"))?;
            }
            "--help" | "-h" => opts.help = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.scenario.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--scenario` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }
    if opts.tui && opts.serve {
        return Err("arguments `--tui` and `--serve` are mutually exclusive".to_string());
    }

    if opts.scenario.is_none() && opts.preset.is_none() {
        opts.preset = Some("default".to_string());
    }

    Ok(opts)
}

fn parse_number(flag: &str, raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("{flag} value \"{raw}\" is not a number"))
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("oa-sim: solar installation buyback and amortization simulator");
    eprintln!();
    eprintln!("Usage: oa-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (default, toulouse, jonquieres)");
    eprintln!("  --capacity <kWc>         Override installed capacity");
    eprintln!("  --yield <kWh/kWc>        Override annual yield per kWc");
    eprintln!("  --curve-out <path>       Export the revenue curve to CSV");
    eprintln!("  --cashflow-out <path>    Export the cash-flow projection to CSV");
    eprintln!("  --tui                    Open the interactive slider UI (feature `tui`)");
    eprintln!("  --serve                  Start the REST API (feature `api`)");
    eprintln!("  --port <u16>             API server port (default: 3000)");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the default preset is used.");
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=oa_sim=debug) for diagnostics on stderr.");
}

#[cfg(test)]
mod tests {
    use super::parse_args_from;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_default_preset() {
        let opts = parse_args_from(Vec::new()).expect("parse should succeed");
        assert_eq!(opts.preset.as_deref(), Some("default"));
        assert!(opts.scenario.is_none());
        assert_eq!(opts.port, 3000);
    }

    #[test]
    fn supports_scenario_cli() {
        let opts = parse_args_from(args(&["--scenario", "scenario.toml"]))
            .expect("parse should succeed");
        assert_eq!(
            opts.scenario.as_deref().and_then(|p| p.to_str()),
            Some("scenario.toml")
        );
        assert!(opts.preset.is_none());
    }

    #[test]
    fn parses_overrides() {
        let opts = parse_args_from(args(&["--capacity", "250", "--yield", "1320.5"]))
            .expect("parse should succeed");
        assert_eq!(opts.capacity_kwc, Some(250.0));
        assert_eq!(opts.yield_kwh_per_kwc, Some(1320.5));
    }

    #[test]
    fn rejects_scenario_and_preset_together() {
        let err = parse_args_from(args(&["--scenario", "a.toml", "--preset", "toulouse"]));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_bad_number_and_missing_value() {
        assert!(parse_args_from(args(&["--capacity", "lots"])).is_err());
        assert!(parse_args_from(args(&["--yield"])).is_err());
        assert!(parse_args_from(args(&["--port", "99999"])).is_err());
    }

    #[test]
    fn rejects_unknown_argument() {
        let err = parse_args_from(args(&["--bogus"])).unwrap_err();
        assert!(err.contains("--bogus"));
    }
}
