//! Hint records and the sources they are loaded from.
//!
//! This crate owns the data model ([`HintRecord`], [`ButtonPositionHint`],
//! [`ButtonKind`]), the JSON config source parser, and the two loaders that
//! feed the resolver:
//!
//! - [`loader::load_overrides`] reads every `*.json` file in a user directory
//! - [`loader::load_defaults`] reads the packaged built-in defaults
//!
//! Both loaders isolate failures: a source that cannot be parsed is logged
//! and reported, never propagated.

pub mod error;
pub mod loader;
pub mod resources;
pub mod schema;
pub mod source;

pub use error::{Error, Result};
pub use loader::{LoadFailure, LoadOutcome, load_defaults, load_overrides};
pub use resources::{
    BUILTIN_HINTS_RESOURCE, EXAMPLE_HINTS_RESOURCE, MemoryResources, PackagedResources,
    ResourceSource,
};
pub use schema::{ButtonKind, ButtonPositionHint, ConfigMapping, HintRecord};
pub use source::{parse_defaults, parse_overrides};
