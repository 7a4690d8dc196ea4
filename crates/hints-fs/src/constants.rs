//! Well-known file names inside a hint config directory.

use std::path::Path;

/// Extension (without the dot) recognized for override files.
pub const CONFIG_EXTENSION: &str = "json";

/// Files the engine itself places into the overrides directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintFile {
    /// Example override file provisioned on first run
    Example,
    /// Destination of a migrated single-file legacy config
    UpgradedLegacy,
}

impl HintFile {
    /// Get the file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Example => "example-hints.json",
            Self::UpgradedLegacy => "upgraded-From-Pre-v1.2.5.json",
        }
    }
}

impl AsRef<Path> for HintFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for HintFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for HintFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
