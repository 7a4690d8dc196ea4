//! List command

use colored::Colorize;
use hints_core::{HintsEngine, NoMetadata};
use std::path::Path;

use super::{RecordView, warn_failures};
use crate::error::Result;

/// Run the list command
pub fn run_list(dir: &Path, json: bool) -> Result<()> {
    let mut engine = HintsEngine::new(NoMetadata);
    let report = engine.init(dir);
    warn_failures(&report);

    let entries = engine.effective_snapshot();

    if json {
        let views: Vec<RecordView<'_>> = entries
            .iter()
            .map(|(id, record)| RecordView::new(id, record))
            .collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("{}", "Effective Hints".bold());
    println!();
    for (id, record) in &entries {
        let mut flags = Vec::new();
        if record.suppressed {
            flags.push("ignored".to_string());
        }
        if record.player_side_only {
            flags.push("player-side".to_string());
        }
        if record.forced {
            flags.push("forced".to_string());
        }
        if !record.button_hints.is_empty() {
            flags.push(format!("{} button(s)", record.button_hints.len()));
        }
        println!("  {} [{}] ({})", id.green(), flags.join(", "), record.provenance().dimmed());
    }
    println!();
    println!(
        "{} {} from override files, {} built in, {} effective.",
        "Total:".dimmed(),
        report.external,
        report.internal,
        report.effective
    );

    Ok(())
}
