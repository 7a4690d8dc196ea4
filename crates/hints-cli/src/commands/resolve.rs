//! Resolve command

use hints_core::{HintsEngine, StaticMetadata};
use std::path::Path;

use super::{RecordView, render_record, warn_failures};
use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(dir: &Path, id: &str, catalog: Option<&Path>, json: bool) -> Result<()> {
    let metadata = match catalog {
        Some(path) => StaticMetadata::load(path)?,
        None => StaticMetadata::new(),
    };
    tracing::debug!(types = metadata.len(), "Metadata catalog ready");

    let mut engine = HintsEngine::new(metadata);
    let report = engine.init(dir);
    warn_failures(&report);

    let record = engine.resolve(id);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&RecordView::new(id, &record))?
        );
    } else {
        print!("{}", render_record(id, &record));
    }
    Ok(())
}
