//! Error types for hints-core

use std::path::PathBuf;

/// Result type for hints-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hints-core operations
///
/// Resolution itself never fails; these surface only from helpers such as
/// catalog loading, or are discarded on purpose by the legacy migration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Metadata catalog could not be read or parsed
    #[error("Invalid metadata catalog at {path}: {message}")]
    InvalidCatalog { path: PathBuf, message: String },

    /// The platform has no per-user config directory
    #[error("No user config directory available on this platform")]
    NoConfigDir,

    /// Filesystem error from hints-fs
    #[error(transparent)]
    Fs(#[from] hints_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
