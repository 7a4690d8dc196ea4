//! Command implementations for hints-cli

pub mod check;
pub mod list;
pub mod migrate;
pub mod resolve;

use colored::Colorize;
use hints_core::{HintRecord, InitReport};
use serde::Serialize;

pub use check::run_check;
pub use list::run_list;
pub use migrate::run_migrate;
pub use resolve::run_resolve;

/// A record together with the identifier it was resolved for.
#[derive(Debug, Serialize)]
pub struct RecordView<'a> {
    pub id: &'a str,
    pub provenance: &'a str,
    #[serde(flatten)]
    pub record: &'a HintRecord,
}

impl<'a> RecordView<'a> {
    pub fn new(id: &'a str, record: &'a HintRecord) -> Self {
        Self {
            id,
            provenance: record.provenance(),
            record,
        }
    }
}

/// Human-readable rendering of one record.
pub fn render_record(id: &str, record: &HintRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", id.bold()));

    if !record.has_hints() && !record.forced {
        out.push_str("  no hints\n");
        return out;
    }
    if !record.provenance().is_empty() {
        out.push_str(&format!("  {:<18}{}\n", "source:", record.provenance()));
    }
    out.push_str(&format!("  {:<18}{}\n", "suppressed:", record.suppressed));
    out.push_str(&format!("  {:<18}{}\n", "player side only:", record.player_side_only));
    out.push_str(&format!("  {:<18}{}\n", "forced:", record.forced));

    if !record.button_hints.is_empty() {
        out.push_str("  buttons:\n");
        for (kind, hint) in &record.button_hints {
            out.push_str(&format!(
                "    {:<20} x={} top={} bottom={}{}\n",
                kind.as_str(),
                hint.horizontal_offset,
                hint.top_offset,
                hint.bottom_offset,
                if hint.hidden { " hidden" } else { "" }
            ));
        }
    }
    out
}

/// Print load failures from an init run to stderr.
pub fn warn_failures(report: &InitReport) {
    for failure in &report.failures {
        let source = if failure.provenance.is_empty() {
            "built-in defaults"
        } else {
            failure.provenance.as_str()
        };
        eprintln!("{} {}: {}", "warning:".yellow().bold(), source, failure.message);
    }
}
