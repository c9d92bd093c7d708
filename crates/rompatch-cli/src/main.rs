mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rompatch_core::PatchConfig;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

#[derive(Parser)]
#[command(name = "rompatch")]
#[command(about = "Find and replace byte patterns in ROM images")]
struct Args {
    #[arg(short, long, default_value = "rompatch.toml", global = true)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a ROM for a byte pattern without modifying it
    Find {
        rom: PathBuf,
        /// Hex bytes, e.g. "DE AD BE EF"
        pattern: String,
        /// Offset to start scanning from (hex)
        #[arg(short, long, default_value = "0")]
        start: String,
    },
    /// Replace every occurrence of a pattern with a same-length replacement
    Replace {
        rom: PathBuf,
        pattern: String,
        replacement: String,
        /// Save a JSON report of replaced offsets
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
    /// Repoint every pointer to OLD so it points at NEW
    Relocate {
        rom: PathBuf,
        /// Old ROM offset (hex)
        old: String,
        /// New ROM offset (hex)
        new: String,
        /// Pointer base address (hex), overrides the config
        #[arg(short, long)]
        base: Option<String>,
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
}

/// Build the log filter, returning the config directive's parse error
/// instead of failing when it is invalid
fn build_filter(verbose: bool, extra: Option<&str>) -> Result<(EnvFilter, Option<String>)> {
    let level = if verbose { "rompatch=debug" } else { "rompatch=info" };
    let filter = EnvFilter::from_default_env().add_directive(level.parse()?);

    let Some(extra) = extra else {
        return Ok((filter, None));
    };
    match extra.parse::<Directive>() {
        Ok(directive) => Ok((filter.add_directive(directive), None)),
        Err(e) => Ok((filter, Some(format!("{} ({:?})", e, extra)))),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Config goes first so it can supply the log filter
    let (config, config_error) = match PatchConfig::load(&args.config) {
        Ok(c) => (c, None),
        Err(e) => (PatchConfig::default(), Some(e)),
    };

    let (filter, rejected) = build_filter(args.verbose, config.log_filter.as_deref())?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = rejected {
        warn!("Ignoring log_filter from {:?}: {}", args.config, e);
    }

    match config_error {
        None => debug!("Loaded config from {:?}", args.config),
        Some(e) if e.is_not_found() => debug!("No config at {:?}, using defaults", args.config),
        Some(e) => warn!("Failed to load config: {}, using defaults", e),
    }

    match args.command {
        Command::Find {
            rom,
            pattern,
            start,
        } => commands::find::run(&rom, &pattern, &start, config),
        Command::Replace {
            rom,
            pattern,
            replacement,
            report,
        } => commands::replace::run(&rom, &pattern, &replacement, config, report.as_deref()),
        Command::Relocate {
            rom,
            old,
            new,
            base,
            report,
        } => commands::relocate::run(
            &rom,
            &old,
            &new,
            base.as_deref(),
            config,
            report.as_deref(),
        ),
    }
}
