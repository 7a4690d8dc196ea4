//! Check command

use colored::Colorize;
use hints_core::{HintsEngine, NoMetadata};
use std::path::Path;

use super::warn_failures;
use crate::error::{CliError, Result};

/// Run the check command
///
/// Fails when any hint source could not be parsed.
pub fn run_check(dir: &Path) -> Result<()> {
    let mut engine = HintsEngine::new(NoMetadata);
    let report = engine.init(dir);

    if report.is_clean() {
        println!(
            "{} {} override record(s) in {}",
            "OK".green().bold(),
            report.external,
            dir.display()
        );
        return Ok(());
    }

    warn_failures(&report);
    Err(CliError::user(format!(
        "{} hint source(s) failed to parse",
        report.failures.len()
    )))
}
