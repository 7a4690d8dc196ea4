//! Hint resolution with a write-through cache
//!
//! The [`HintsEngine`] merges three sources, in order of authority:
//!
//! 1. Override files (`<overrides dir>/*.json`)
//! 2. Built-in defaults (packaged resource)
//! 3. Markers on the type itself, via [`MetadataProvider`]
//!
//! Config sources are merged eagerly by [`HintsEngine::init`]. Metadata is
//! consulted lazily, only for identifiers that no config source defines or
//! whose cached record is not forced and that carry markers of their own.
//! Metadata-derived records are never merged with config records.

use hints_meta::{
    ConfigMapping, HintRecord, LoadFailure, PackagedResources, ResourceSource, load_defaults,
    load_overrides,
};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::metadata::{Marker, MetadataProvider};
use crate::migration::{MigrationReport, upgrade_legacy_config};

/// Upper bound on supertypes visited while looking for an ignore marker.
pub const MAX_HIERARCHY_DEPTH: usize = 256;

/// Summary of one [`HintsEngine::init`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Records taken from override files
    pub external: usize,
    /// Records taken from built-in defaults
    pub internal: usize,
    /// Entries in the effective mapping after the merge
    pub effective: usize,
    /// Sources that failed to parse and were skipped
    pub failures: Vec<LoadFailure>,
}

impl InitReport {
    /// Whether every source loaded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolves hints for host types and caches the results.
///
/// Lifecycle calls ([`init`](Self::init), [`reset`](Self::reset)) need
/// `&mut self`, so they cannot overlap with resolution. Once initialized,
/// [`resolve`](Self::resolve) takes `&self` and may run on many threads.
pub struct HintsEngine<M> {
    metadata: M,
    resources: Box<dyn ResourceSource>,
    overrides_dir: Option<PathBuf>,
    external: ConfigMapping,
    internal: ConfigMapping,
    effective: RwLock<ConfigMapping>,
}

impl<M: MetadataProvider> HintsEngine<M> {
    /// Create an engine using the packaged built-in resources.
    pub fn new(metadata: M) -> Self {
        Self::with_resources(metadata, PackagedResources)
    }

    /// Create an engine reading built-in resources from `resources`.
    pub fn with_resources(metadata: M, resources: impl ResourceSource + 'static) -> Self {
        Self {
            metadata,
            resources: Box::new(resources),
            overrides_dir: None,
            external: ConfigMapping::new(),
            internal: ConfigMapping::new(),
            effective: RwLock::new(ConfigMapping::new()),
        }
    }

    /// Load all config sources and rebuild the cache.
    ///
    /// Override records take priority over built-in defaults for the same
    /// identifier. Sources that fail to parse are logged and skipped; the
    /// engine is always usable afterwards.
    pub fn init(&mut self, overrides_dir: impl Into<PathBuf>) -> InitReport {
        self.reset();
        let overrides_dir = overrides_dir.into();

        let external = load_overrides(&overrides_dir);
        let internal = load_defaults(self.resources.as_ref());
        self.overrides_dir = Some(overrides_dir);
        self.external = external.configs;
        self.internal = internal.configs;

        let effective = self.effective.get_mut();
        for (id, record) in &self.external {
            effective
                .entry(id.clone())
                .or_insert_with(|| Arc::clone(record));
        }
        for (id, record) in &self.internal {
            effective
                .entry(id.clone())
                .or_insert_with(|| Arc::clone(record));
        }

        let mut failures = external.failures;
        failures.extend(internal.failures);
        let report = InitReport {
            external: self.external.len(),
            internal: self.internal.len(),
            effective: effective.len(),
            failures,
        };

        tracing::debug!(
            dir = ?self.overrides_dir,
            external = report.external,
            internal = report.internal,
            effective = report.effective,
            failures = report.failures.len(),
            "Hint engine initialized"
        );
        report
    }

    /// Drop every loaded and cached record. The overrides path is kept.
    pub fn reset(&mut self) {
        self.external.clear();
        self.internal.clear();
        self.effective.get_mut().clear();
    }

    /// Effective hints for `id`.
    ///
    /// Never fails: an identifier nothing knows about resolves to the shared
    /// [`HintRecord::no_hints`] record.
    pub fn resolve(&self, id: &str) -> Arc<HintRecord> {
        if let Some(cached) = self.cached(id) {
            return cached;
        }

        let record = self.compute(id);
        self.effective
            .write()
            .insert(id.to_string(), Arc::clone(&record));
        record
    }

    /// Whether the integration for `id` is restricted to the player side.
    ///
    /// An absent identifier is never player-side only.
    pub fn is_player_side_only(&self, id: Option<&str>) -> bool {
        id.is_some_and(|id| self.resolve(id).player_side_only)
    }

    /// Run the legacy config migration using this engine's resources.
    pub fn upgrade_legacy_config(&self, old_file: &Path, new_dir: &Path) -> MigrationReport {
        upgrade_legacy_config(old_file, new_dir, self.resources.as_ref())
    }

    fn cached(&self, id: &str) -> Option<Arc<HintRecord>> {
        let hit = self.effective.read().get(id).cloned()?;
        if !hit.forced && self.has_direct_markers(id) {
            tracing::trace!(id, provenance = hit.provenance(), "Markers override cached hints");
            return None;
        }
        Some(hit)
    }

    fn has_direct_markers(&self, id: &str) -> bool {
        Marker::DIRECT
            .iter()
            .any(|&marker| self.metadata.has_marker(id, marker))
    }

    fn compute(&self, id: &str) -> Arc<HintRecord> {
        let ignored = match self.find_ignored_type(id) {
            Some(ancestor) => {
                if ancestor != id {
                    // Warm the ancestor's cache entry
                    self.resolve(&ancestor);
                }
                true
            }
            None => false,
        };

        let mut button_hints = BTreeMap::new();
        for hint in self.metadata.gui_hints(id) {
            button_hints.insert(hint.button, hint.position());
        }

        let player_side_only = self.metadata.has_marker(id, Marker::PlayerSideOnly);

        if !ignored && !player_side_only && button_hints.is_empty() {
            return HintRecord::no_hints();
        }

        tracing::trace!(id, ignored, player_side_only, "Hints derived from metadata");
        Arc::new(HintRecord::new(ignored, player_side_only, button_hints).with_provenance(id))
    }

    /// Nearest type, starting at `id` itself, that carries the ignore marker.
    fn find_ignored_type(&self, id: &str) -> Option<String> {
        let mut current = id.to_string();
        for _ in 0..MAX_HIERARCHY_DEPTH {
            if self.metadata.has_marker(&current, Marker::Ignore) {
                return Some(current);
            }
            current = self.metadata.superclass(&current)?;
        }

        tracing::warn!(
            id,
            max_depth = MAX_HIERARCHY_DEPTH,
            "Type hierarchy too deep, ignore marker search abandoned"
        );
        None
    }
}

impl<M> HintsEngine<M> {
    /// Directory passed to the last [`init`](HintsEngine::init).
    pub fn overrides_dir(&self) -> Option<&Path> {
        self.overrides_dir.as_deref()
    }

    /// Records loaded from override files.
    pub fn external(&self) -> &ConfigMapping {
        &self.external
    }

    /// Records loaded from built-in defaults.
    pub fn internal(&self) -> &ConfigMapping {
        &self.internal
    }

    /// Copy of the effective mapping, sorted by identifier.
    pub fn effective_snapshot(&self) -> Vec<(String, Arc<HintRecord>)> {
        let mut entries: Vec<_> = self
            .effective
            .read()
            .iter()
            .map(|(id, record)| (id.clone(), Arc::clone(record)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Number of entries in the effective mapping.
    pub fn len(&self) -> usize {
        self.effective.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.effective.read().is_empty()
    }
}
