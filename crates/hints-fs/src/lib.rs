//! Filesystem primitives for hint config directories
//!
//! Provides config file discovery, safe writes and best-effort moves used by
//! the hint loaders and the legacy config migration.

pub mod constants;
pub mod error;
pub mod io;
pub mod scan;

pub use constants::{CONFIG_EXTENSION, HintFile};
pub use error::{Error, Result};
pub use scan::{find_config_files, has_config_extension};
