//! hintweave CLI
//!
//! Inspects how override files, built-in defaults and type metadata resolve
//! for host types.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use hints_core::HintsSettings;
use std::path::{Path, PathBuf};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.dir),
        None => {
            println!("{} hint resolution inspector", "hints".green().bold());
            println!();
            println!("Run {} for available commands.", "hints --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, dir: Option<PathBuf>) -> Result<()> {
    match cmd {
        Commands::Resolve { id, catalog, json } => {
            let settings = settings(dir, None)?;
            commands::run_resolve(&settings.overrides_dir, &id, catalog.as_deref(), json)
        }
        Commands::List { json } => {
            let settings = settings(dir, None)?;
            commands::run_list(&settings.overrides_dir, json)
        }
        Commands::Check => {
            let settings = settings(dir, None)?;
            commands::run_check(&settings.overrides_dir)
        }
        Commands::Migrate { legacy } => {
            let settings = settings(dir, legacy)?;
            commands::run_migrate(&settings.legacy_file, &settings.overrides_dir)
        }
    }
}

/// Platform settings with command-line overrides applied.
///
/// With `--dir`, the default legacy file sits next to that directory.
fn settings(dir: Option<PathBuf>, legacy: Option<PathBuf>) -> Result<HintsSettings> {
    let settings = match dir {
        Some(dir) => {
            let root = dir.parent().map(Path::to_path_buf).unwrap_or_default();
            HintsSettings::new(root).with_overrides_dir(dir)
        }
        None => HintsSettings::from_platform()?,
    };
    Ok(match legacy {
        Some(legacy) => settings.with_legacy_file(legacy),
        None => settings,
    })
}
