//! Legacy config migration and example provisioning
//!
//! Older releases kept every override in one file. On startup the host calls
//! [`upgrade_legacy_config`] to move that file into the overrides directory
//! and to drop an example file there on first run.
//!
//! Both steps are conveniences: they return `Result` internally, and the
//! public entry point discards errors after tracing them at debug level so
//! startup never fails because of them.

use hints_fs::HintFile;
use hints_meta::{EXAMPLE_HINTS_RESOURCE, ResourceSource};
use std::path::{Path, PathBuf};

use crate::Result;

/// What [`upgrade_legacy_config`] actually changed on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// The legacy file was moved into the overrides directory
    pub legacy_moved: bool,
    /// The example file was written
    pub example_written: bool,
}

impl MigrationReport {
    pub fn changed_anything(&self) -> bool {
        self.legacy_moved || self.example_written
    }
}

/// Move `old_file` into `new_dir` and provision the example file.
///
/// The legacy file lands at `<new_dir>/upgraded-From-Pre-v1.2.5.json` and is
/// never moved over an existing file. The example is written only when
/// `<new_dir>/example-hints.json` does not exist yet. With no legacy file and
/// an example already in place, nothing is written.
///
/// Only a regular file at `old_file` is migrated. A directory at that path is
/// left in place and reported as not moved.
pub fn upgrade_legacy_config(
    old_file: &Path,
    new_dir: &Path,
    resources: &dyn ResourceSource,
) -> MigrationReport {
    let mut report = MigrationReport::default();

    if old_file.is_file() {
        match move_legacy_file(old_file, new_dir) {
            Ok(destination) => {
                tracing::info!(from = ?old_file, to = ?destination, "Migrated legacy hint config");
                report.legacy_moved = true;
            }
            Err(e) => {
                // Best effort: a failed move leaves the legacy file where it was
                tracing::debug!(from = ?old_file, error = %e, "Legacy hint config not migrated");
            }
        }
    }

    let example = new_dir.join(HintFile::Example);
    if !example.exists() {
        match provision_example(&example, resources) {
            Ok(written) => report.example_written = written,
            Err(e) => {
                tracing::debug!(path = ?example, error = %e, "Example hint file not written");
            }
        }
    }

    report
}

fn move_legacy_file(old_file: &Path, new_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(new_dir)?;
    let destination = new_dir.join(HintFile::UpgradedLegacy);
    hints_fs::io::move_file(old_file, &destination)?;
    Ok(destination)
}

/// Returns `false` when no example resource is packaged.
fn provision_example(path: &Path, resources: &dyn ResourceSource) -> Result<bool> {
    let Some(content) = resources.open(EXAMPLE_HINTS_RESOURCE) else {
        return Ok(false);
    };
    hints_fs::io::write_atomic(path, &content)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hints_meta::{MemoryResources, PackagedResources};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_existing_destination_is_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let old_file = temp.path().join("legacy.json");
        let new_dir = temp.path().join("hints");
        fs::create_dir_all(&new_dir).unwrap();
        fs::write(&old_file, "legacy").unwrap();
        fs::write(new_dir.join(HintFile::UpgradedLegacy), "earlier").unwrap();

        let report = upgrade_legacy_config(&old_file, &new_dir, &PackagedResources);

        assert!(!report.legacy_moved);
        assert!(old_file.exists());
        assert_eq!(
            fs::read_to_string(new_dir.join(HintFile::UpgradedLegacy)).unwrap(),
            "earlier"
        );
    }

    #[test]
    fn test_legacy_directory_is_left_in_place() {
        let temp = TempDir::new().unwrap();
        let old_path = temp.path().join("legacy.json");
        let new_dir = temp.path().join("hints");
        fs::create_dir_all(&old_path).unwrap();

        let report = upgrade_legacy_config(&old_path, &new_dir, &PackagedResources);

        assert!(!report.legacy_moved);
        assert!(old_path.is_dir());
        assert!(!new_dir.join(HintFile::UpgradedLegacy).exists());
        assert!(report.example_written);
    }

    #[test]
    fn test_missing_example_resource_is_skipped() {
        let temp = TempDir::new().unwrap();

        let report = upgrade_legacy_config(
            &temp.path().join("absent.json"),
            temp.path(),
            &MemoryResources::new(),
        );

        assert!(!report.changed_anything());
        assert!(!temp.path().join(HintFile::Example).exists());
    }
}
