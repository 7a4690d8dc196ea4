//! Config source parser
//!
//! Turns raw bytes into a [`ConfigMapping`], stamping each record with the
//! provenance id used in diagnostics.

use std::collections::HashMap;
use std::sync::Arc;

use crate::schema::{ConfigMapping, HintRecord};
use crate::{Error, Result};

/// Parse an override file: a flat object of identifier → record.
///
/// Every record is stamped with `provenance` (the file name).
pub fn parse_overrides(bytes: &[u8], provenance: &str) -> Result<ConfigMapping> {
    let parsed: HashMap<String, HintRecord> =
        serde_json::from_slice(bytes).map_err(|source| Error::Parse {
            provenance: provenance.to_string(),
            source,
        })?;

    Ok(parsed
        .into_iter()
        .map(|(id, record)| (id, Arc::new(record.with_provenance(provenance))))
        .collect())
}

/// Parse the built-in defaults: category → (identifier → record).
///
/// Categories are flattened away and each record is stamped with its own
/// identifier. When two categories define the same identifier, whichever
/// category is visited last wins; category order is unspecified.
///
/// A malformed document yields an error and no entries at all.
pub fn parse_defaults(bytes: &[u8]) -> Result<ConfigMapping> {
    let parsed: HashMap<String, HashMap<String, HintRecord>> =
        serde_json::from_slice(bytes).map_err(|source| Error::Parse {
            provenance: String::new(),
            source,
        })?;

    let mut configs = ConfigMapping::new();
    for (category, records) in parsed {
        tracing::trace!(%category, count = records.len(), "Flattening built-in category");
        for (id, record) in records {
            let record = Arc::new(record.with_provenance(id.as_str()));
            configs.insert(id, record);
        }
    }
    Ok(configs)
}
