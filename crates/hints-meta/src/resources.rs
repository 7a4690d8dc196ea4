//! Packaged resources
//!
//! The built-in defaults and the example override file ship inside the
//! binary. Hosts that bundle their own assets, and tests that need a
//! missing or broken resource, plug in a different [`ResourceSource`].

use std::borrow::Cow;
use std::collections::HashMap;

/// Resource path of the built-in defaults.
pub const BUILTIN_HINTS_RESOURCE: &str = "assets/config/builtin-hints.json";

/// Resource path of the example override file.
pub const EXAMPLE_HINTS_RESOURCE: &str = "assets/config/example-hints.json";

/// Loads packaged resources by path.
pub trait ResourceSource: Send + Sync {
    /// Returns the resource content, or `None` when it is not packaged.
    fn open(&self, name: &str) -> Option<Cow<'_, [u8]>>;
}

/// Resources embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackagedResources;

impl ResourceSource for PackagedResources {
    fn open(&self, name: &str) -> Option<Cow<'_, [u8]>> {
        let content: &'static str = match name {
            BUILTIN_HINTS_RESOURCE => include_str!("../assets/config/builtin-hints.json"),
            EXAMPLE_HINTS_RESOURCE => include_str!("../assets/config/example-hints.json"),
            _ => return None,
        };
        Some(Cow::Borrowed(content.as_bytes()))
    }
}

/// Resources held in memory.
///
/// # Example
///
/// ```
/// use hints_meta::{BUILTIN_HINTS_RESOURCE, MemoryResources, ResourceSource};
///
/// let resources = MemoryResources::new().with(BUILTIN_HINTS_RESOURCE, "{}");
/// assert!(resources.open(BUILTIN_HINTS_RESOURCE).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any previous content under `name`.
    pub fn with(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), content.into());
    }
}

impl ResourceSource for MemoryResources {
    fn open(&self, name: &str) -> Option<Cow<'_, [u8]>> {
        self.entries
            .get(name)
            .map(|content| Cow::Borrowed(content.as_slice()))
    }
}
