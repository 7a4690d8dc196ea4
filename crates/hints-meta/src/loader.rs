//! Loaders for override files and built-in defaults
//!
//! ```text
//! <overrides dir>/
//!   example-hints.json
//!   my-modpack.json
//!   upgraded-From-Pre-v1.2.5.json
//! ```
//!
//! Every `*.json` directly inside the overrides directory is a flat
//! identifier → record object. The built-in defaults are a single packaged
//! resource grouped by category.

use std::path::Path;

use crate::resources::{BUILTIN_HINTS_RESOURCE, ResourceSource};
use crate::schema::ConfigMapping;
use crate::source::{parse_defaults, parse_overrides};
use crate::{Error, Result};

/// A source that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// File name, or empty for the built-in defaults
    pub provenance: String,
    /// Underlying error message
    pub message: String,
}

/// Records loaded from one kind of source, plus the failures skipped over.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub configs: ConfigMapping,
    pub failures: Vec<LoadFailure>,
}

impl LoadOutcome {
    fn record_failure(&mut self, provenance: &str, error: &Error) {
        let message = match error {
            Error::Parse { source, .. } => source.to_string(),
            other => other.to_string(),
        };
        tracing::error!("Unable to parse hint file: '{}'. Error: {}", provenance, message);
        self.failures.push(LoadFailure {
            provenance: provenance.to_string(),
            message,
        });
    }
}

/// Load every override file directly inside `dir`.
///
/// A missing directory yields an empty outcome. Each file is parsed on its
/// own; a file that fails is logged and recorded in
/// [`LoadOutcome::failures`] while the others still load. When two files
/// define the same identifier, the file visited later wins.
pub fn load_overrides(dir: &Path) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    let files = match hints_fs::find_config_files(dir) {
        Ok(files) => files,
        Err(e) => {
            outcome.record_failure(&dir.display().to_string(), &Error::Fs(e));
            return outcome;
        }
    };

    for path in files {
        let id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match load_override_file(&path, &id) {
            Ok(configs) => {
                tracing::debug!(file = %id, count = configs.len(), "Loaded override file");
                outcome.configs.extend(configs);
            }
            Err(e) => outcome.record_failure(&id, &e),
        }
    }

    outcome
}

fn load_override_file(path: &Path, id: &str) -> Result<ConfigMapping> {
    let bytes = hints_fs::io::read_bytes(path)?;
    parse_overrides(&bytes, id)
}

/// Load the built-in defaults from the packaged resource.
///
/// An absent resource yields an empty outcome without a failure; a malformed
/// one yields a single failure with an empty provenance and no records.
pub fn load_defaults(resources: &dyn ResourceSource) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    let Some(bytes) = resources.open(BUILTIN_HINTS_RESOURCE) else {
        tracing::debug!("No built-in hints resource packaged");
        return outcome;
    };

    match parse_defaults(&bytes) {
        Ok(configs) => {
            tracing::debug!(count = configs.len(), "Loaded built-in hints");
            outcome.configs = configs;
        }
        Err(e) => outcome.record_failure("", &e),
    }

    outcome
}
