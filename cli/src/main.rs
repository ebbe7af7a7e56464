//! Congestion toll calculator — command line front end
//!
//! ```sh
//! # Fee for a car passing twice on a Monday
//! toll-calculator 2023-01-02T07:30:00 2023-01-02T16:05:00
//!
//! # Itemised per day and window, as JSON
//! toll-calculator --vehicle car --json 2023-01-02T07:30:00
//!
//! # Validate config without calculating
//! toll-calculator --config /etc/toll-calculator/config.toml --check
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use clap::Parser;
use tracing::{debug, error, info};

use toll_calculator::config::{AppConfig, CalendarKind};
use toll_calculator::{
    init_tracing, ConfigError, TollBreakdown, TollCalculator, Vehicle, VehicleCategory,
};

const PASSAGE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Calculate the congestion toll for a vehicle's passages.
#[derive(Parser, Debug)]
#[command(
    name = "toll-calculator",
    version,
    about = "Congestion toll calculator",
    long_about = "Calculates the congestion toll owed for a list of toll-point passages.\n\n\
                  Default config: ~/.config/toll-calculator/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TOLL_CONFIG")]
    config: Option<PathBuf>,

    /// Vehicle category (car, motorbike, tractor, emergency, diplomat, foreign, military).
    #[arg(short, long, default_value = "car")]
    vehicle: VehicleCategory,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print the fee per day and window.
    #[arg(long)]
    breakdown: bool,

    /// Print the breakdown as JSON.
    #[arg(long)]
    json: bool,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    /// Passage timestamps, e.g. 2023-01-02T07:30:00
    #[arg(value_parser = parse_passage)]
    passages: Vec<NaiveDateTime>,
}

fn parse_passage(s: &str) -> Result<NaiveDateTime, String> {
    PASSAGE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s.trim(), format).ok())
        .ok_or_else(|| format!("invalid passage timestamp '{s}', expected YYYY-MM-DDTHH:MM:SS"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(toll_calculator::default_config_path);

    let (mut config, load_error) = if config_path.exists() {
        match AppConfig::load(&config_path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (AppConfig::default(), Some(e)),
        }
    } else {
        (AppConfig::default(), None)
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);

    match &load_error {
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
        None if config_path.exists() => info!("Configuration loaded from {}", config_path.display()),
        None => debug!("No config at {}, using defaults", config_path.display()),
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        let loaded = match load_error {
            Some(e) => Err(e),
            None if config_path.exists() => Ok(config),
            // reports the missing file as an I/O error
            None => AppConfig::load(&config_path),
        };
        print!("{}", check_config(&config_path, loaded)?);
        return Ok(());
    }

    // ── Calculate ──────────────────────────────────────────────
    let calculator = TollCalculator::from_config(&config);
    let vehicle = Vehicle::new(cli.vehicle);

    if cli.json {
        let breakdown = calculator.calculate_toll_breakdown(&vehicle, &cli.passages)?;
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else if cli.breakdown {
        let breakdown = calculator.calculate_toll_breakdown(&vehicle, &cli.passages)?;
        print!("{}", render_breakdown(&breakdown));
    } else {
        let fee = calculator.calculate_toll_fee(&vehicle, &cli.passages)?;
        println!("{fee}");
    }

    Ok(())
}

/// Summary printed by `--check`, or the error that made the config unusable.
fn check_config(path: &Path, loaded: Result<AppConfig, ConfigError>) -> Result<String, ConfigError> {
    let config = loaded?;
    let calendar = match config.holidays.calendar {
        CalendarKind::Weekend => "weekend",
        CalendarKind::Public => "public holidays",
    };
    let exempt: Vec<String> = config
        .exemptions
        .vehicles
        .iter()
        .map(|category| category.to_string())
        .collect();

    let mut out = String::from("Configuration is valid\n");
    out.push_str(&format!("   Config file  : {}\n", path.display()));
    out.push_str(&format!("   Log level    : {}\n", config.logging.level));
    out.push_str(&format!("   Calendar     : {}\n", calendar));
    out.push_str(&format!("   Extra dates  : {}\n", config.holidays.extra_dates.len()));
    out.push_str(&format!("   Toll-free    : {}\n", exempt.join(", ")));
    Ok(out)
}

fn render_breakdown(breakdown: &TollBreakdown) -> String {
    let mut out = String::new();
    if breakdown.vehicle_exempt {
        out.push_str(&format!("{} is toll-free\n", breakdown.vehicle.category));
    }
    for day in &breakdown.days {
        if day.toll_free {
            out.push_str(&format!("{}  toll-free\n", day.date));
            continue;
        }
        let capped = if day.is_capped() { " (capped)" } else { "" };
        out.push_str(&format!("{}  {}{}\n", day.date, day.total, capped));
        for window in &day.windows {
            let times: Vec<String> = window
                .passages
                .iter()
                .map(|time| time.format("%H:%M").to_string())
                .collect();
            out.push_str(&format!("    {:>3}  {}\n", window.fee, times.join(" ")));
        }
    }
    out.push_str(&format!("Total: {}\n", breakdown.total));
    out
}
