//! Discovery of override files in a config directory

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{CONFIG_EXTENSION, Error, Result};

/// Check whether a file name carries the config extension, ignoring case.
pub fn has_config_extension(file_name: &str) -> bool {
    let lowered = file_name.to_lowercase();
    lowered
        .strip_suffix(CONFIG_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// List the config files directly inside `dir`.
///
/// Only immediate children are considered. Symlinks are followed, so a link
/// to a regular config file counts as one. A missing path, or a path that is
/// not a directory, yields an empty list.
///
/// The order of the returned paths is whatever the directory yields.
pub fn find_config_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(Error::Walk {
                    path: dir.to_path_buf(),
                    message: e.to_string(),
                });
            }
            Err(e) => {
                // Dangling symlink or unreadable entry
                tracing::warn!(error = %e, "Skipping unreadable entry in {}", dir.display());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if has_config_extension(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
