//! Migrate command

use colored::Colorize;
use hints_core::upgrade_legacy_config;
use hints_meta::PackagedResources;
use std::path::Path;

use crate::error::Result;

/// Run the migrate command
pub fn run_migrate(legacy: &Path, dir: &Path) -> Result<()> {
    let report = upgrade_legacy_config(legacy, dir, &PackagedResources);

    if report.legacy_moved {
        println!("{} {} into {}", "Moved".green().bold(), legacy.display(), dir.display());
    }
    if report.example_written {
        println!("{} example file in {}", "Wrote".green().bold(), dir.display());
    }
    if !report.changed_anything() {
        println!("Nothing to migrate.");
    }
    Ok(())
}
