//! Fitness training tracker.
//!
//! Reads workout sensor packages (built-in samples, a single package from the
//! command line, or a package file) and prints one report line per workout.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use tracker::core::workout::WorkoutType;
use tracker::dispatch::read_package;
use tracker::io::config::{
    DEFAULT_CONFIG_PATH, TrackerConfig, UnknownPolicy, load_config, write_config,
};
use tracker::io::packages::load_packages;
use tracker::report::{OutputFormat, report, report_packages};
use tracker::samples::sample_packages;
use tracker::{TrainingError, exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "tracker",
    version,
    about = "Fitness training statistics from sensor packages"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file; a missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Report format (overrides the config file).
    #[arg(long, global = true)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Command {
    /// Report the built-in sample packages.
    Demo,
    /// Report one workout given on the command line.
    Report {
        /// Workout code (RUN, SWM, WLK).
        code: String,
        /// Positional readings (see `tracker codes`).
        #[arg(allow_negative_numbers = true)]
        data: Vec<f64>,
    },
    /// Report every package in a `.toml` or `.json` file.
    Batch {
        /// Package file.
        file: PathBuf,
    },
    /// List workout codes and their argument order.
    Codes,
    /// Write the default config file if missing.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Demo => {
            let cfg = load_config(&cli.config)?;
            cmd_demo(cli.format.unwrap_or(cfg.format))
        }
        Command::Report { code, data } => {
            let cfg = load_config(&cli.config)?;
            cmd_report(&code, &data, cli.format.unwrap_or(cfg.format))
        }
        Command::Batch { file } => {
            let cfg = load_config(&cli.config)?;
            cmd_batch(&file, cli.format.unwrap_or(cfg.format), cfg.on_unknown)
        }
        Command::Codes => cmd_codes(),
        Command::Init { force } => cmd_init(&cli.config, force),
    }
}

fn cmd_demo(format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    report_packages(
        &sample_packages(),
        format,
        UnknownPolicy::Fail,
        &mut out,
        &mut io::stderr().lock(),
    )?;
    Ok(())
}

fn cmd_report(code: &str, data: &[f64], format: OutputFormat) -> Result<()> {
    let workout = read_package(code, data)?;
    let mut out = io::stdout().lock();
    report(&workout, format, &mut out)?;
    Ok(())
}

fn cmd_batch(file: &Path, format: OutputFormat, on_unknown: UnknownPolicy) -> Result<()> {
    let packages = load_packages(file)?;
    info!(file = %file.display(), count = packages.len(), "loaded packages");
    let mut out = io::stdout().lock();
    let summary = report_packages(
        &packages,
        format,
        on_unknown,
        &mut out,
        &mut io::stderr().lock(),
    )?;
    info!(
        reported = summary.reported,
        skipped = summary.skipped.len(),
        "batch finished"
    );
    Ok(())
}

fn cmd_codes() -> Result<()> {
    let mut out = io::stdout().lock();
    for kind in WorkoutType::ALL {
        writeln!(out, "{}  {}", kind.code(), kind.argument_names().join(", "))
            .context("write codes")?;
    }
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        return Ok(());
    }
    write_config(path, &TrackerConfig::default())
}

/// Map an error chain to a stable exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
    let unknown = err.chain().any(|cause| {
        cause
            .downcast_ref::<TrainingError>()
            .is_some_and(TrainingError::is_unknown_workout)
    });
    if unknown {
        exit_codes::UNKNOWN_WORKOUT
    } else {
        exit_codes::INVALID
    }
}
