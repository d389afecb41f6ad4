//! Congestion tax — command-line calculator
//!
//! Prints the congestion tax one vehicle owes for a day of passages.
//!
//! ```sh
//! # Passages as arguments
//! congestion-tax --vehicle Car "2013-02-08 06:27:00" "2013-02-08 15:29:00"
//!
//! # One timestamp per line, full breakdown as JSON
//! congestion-tax --vehicle Car --file passes.txt --format json
//!
//! # Validate config without calculating
//! congestion-tax --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use congestion_tax::shared::{parse_passage_lines, parse_passages};
use congestion_tax::{
    default_config_path, AppConfig, AppResult, DailyTaxBreakdown, OutputFormat, TaxService,
    VehicleClass,
};

/// Congestion tax for one vehicle and one day of passages.
#[derive(Parser, Debug)]
#[command(
    name = "congestion-tax",
    version,
    about = "Daily congestion tax calculator (2013 Gothenburg schedule)",
    long_about = "Computes the congestion tax owed for one vehicle's passages on a single day.\n\n\
                  Default config: ~/.config/congestion-tax/config.toml"
)]
struct Cli {
    /// Vehicle class (Car, Bus, Truck, Motorbike, Tractor, Emergency, Diplomat, Foreign, Military).
    /// Unknown or missing classes are taxed.
    #[arg(short, long)]
    vehicle: Option<VehicleClass>,

    /// Passage timestamps, e.g. "2013-02-08 06:27:00".
    passages: Vec<String>,

    /// Read passages from a file, one per line.
    #[arg(long, conflicts_with = "passages")]
    file: Option<PathBuf>,

    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CONGESTION_TAX_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (text, json). Uses config value if not specified.
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Accept passages spanning more than one day.
    #[arg(long)]
    no_strict: bool,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_strict {
        config.calculator.strict_single_day = false;
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file      : {}", config_path.display());
        println!("   Log level        : {}", config.logging.level);
        println!("   Log format       : {}", config.logging.format);
        println!("   Strict single day: {}", config.calculator.strict_single_day);
        println!("   Output format    : {}", config.output.format);
        return ExitCode::SUCCESS;
    }

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> AppResult<()> {
    let passages = match cli.file {
        Some(ref path) => parse_passage_lines(&std::fs::read_to_string(path)?)?,
        None => parse_passages(&cli.passages)?,
    };

    let service = TaxService::from_config(&config.calculator);
    let breakdown = service.daily_breakdown(cli.vehicle, &passages)?;

    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&breakdown)?),
        OutputFormat::Text => print_text(&breakdown),
    }
    Ok(())
}

fn print_text(breakdown: &DailyTaxBreakdown) {
    let vehicle = breakdown
        .vehicle_class
        .map(|c| c.to_string())
        .unwrap_or_else(|| "Unclassified".to_string());
    let date = breakdown
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!("Vehicle : {}", vehicle);
    println!("Date    : {}", date);
    if breakdown.exempt {
        println!("Exempt vehicle class, no tax charged");
    }
    for window in &breakdown.windows {
        println!("Window {} -> {}", window.start.time(), window.fee);
        for passage in &window.passages {
            match passage.toll_free_reason {
                Some(reason) => println!("    {}  {:>3}  ({})", passage.at.time(), passage.fee, reason),
                None => println!("    {}  {:>3}", passage.at.time(), passage.fee),
            }
        }
    }
    if breakdown.is_capped() {
        println!(
            "Total   : {} (capped from {})",
            breakdown.total, breakdown.uncapped_total
        );
    } else {
        println!("Total   : {}", breakdown.total);
    }
}

/// Install the tracing subscriber; `RUST_LOG` takes precedence over the config level
fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    // Logs go to stderr so stdout stays parseable
    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
