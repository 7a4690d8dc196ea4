//! Where the engine looks for its files
//!
//! Defaults live under the platform config directory:
//! - Linux: `~/.config/hintweave/`
//! - macOS: `~/Library/Application Support/hintweave/`
//! - Windows: `%APPDATA%\hintweave\`

use std::path::PathBuf;

use crate::{Error, Result};

/// Application directory name under the platform config directory.
pub const APP_DIR: &str = "hintweave";

/// Paths used by the engine lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintsSettings {
    /// Directory scanned for override files
    pub overrides_dir: PathBuf,
    /// Single-file config written by older releases
    pub legacy_file: PathBuf,
}

impl HintsSettings {
    /// Settings rooted at `config_root`.
    pub fn new(config_root: impl Into<PathBuf>) -> Self {
        let root = config_root.into();
        Self {
            overrides_dir: root.join("integration-hints"),
            legacy_file: root.join("integration-hints.json"),
        }
    }

    /// Settings rooted at the platform config directory.
    pub fn from_platform() -> Result<Self> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join(APP_DIR)))
            .ok_or(Error::NoConfigDir)
    }

    pub fn with_overrides_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.overrides_dir = dir.into();
        self
    }

    pub fn with_legacy_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.legacy_file = file.into();
        self
    }
}
