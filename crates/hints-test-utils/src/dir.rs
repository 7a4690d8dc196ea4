//! [`HintsDir`] builder for override-directory test scenarios.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary config root with an overrides directory inside it.
///
/// # Example
///
/// ```rust
/// use hints_test_utils::HintsDir;
/// use serde_json::json;
///
/// let dir = HintsDir::new();
/// dir.write_json("a.json", &json!({"com.example.Foo": {"force": true}}));
/// dir.assert_file_exists("a.json");
/// ```
pub struct HintsDir {
    temp_dir: TempDir,
    overrides: PathBuf,
}

impl Default for HintsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl HintsDir {
    /// Create an empty config root with an empty `integration-hints/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let overrides = temp_dir.path().join("integration-hints");
        fs::create_dir_all(&overrides).unwrap();
        Self {
            temp_dir,
            overrides,
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The overrides directory.
    pub fn path(&self) -> &Path {
        &self.overrides
    }

    /// Write a file into the overrides directory verbatim.
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.overrides.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a JSON document into the overrides directory.
    pub fn write_json(&self, name: &str, document: &Value) -> PathBuf {
        self.write_raw(name, &serde_json::to_string_pretty(document).unwrap())
    }

    /// Write a file into the config root, outside the overrides directory.
    pub fn write_root_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Sorted file names inside the overrides directory.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.overrides)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that a file exists inside the overrides directory.
    pub fn assert_file_exists(&self, name: &str) {
        assert!(
            self.overrides.join(name).exists(),
            "Expected {} to exist in {}",
            name,
            self.overrides.display()
        );
    }

    /// Read a file from the overrides directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.overrides.join(name)).unwrap()
    }
}
