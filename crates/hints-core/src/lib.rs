//! Layered hint resolution engine
//!
//! Given the identifier of a host type, the engine decides how the host's
//! UI integration should treat it by layering three sources:
//!
//! - **Override files**: every `*.json` in the user's overrides directory
//! - **Built-in defaults**: a curated resource packaged with the crate
//! - **Type metadata**: markers on the type itself, via [`MetadataProvider`]
//!
//! # Architecture
//!
//! ```text
//!                 hints-cli / host
//!                        |
//!                   hints-core
//!                        |
//!              +---------+---------+
//!              |                   |
//!          hints-meta          hints-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use hints_core::{HintsEngine, HintsSettings, NoMetadata};
//!
//! let settings = HintsSettings::from_platform()?;
//! let mut engine = HintsEngine::new(NoMetadata);
//! engine.upgrade_legacy_config(&settings.legacy_file, &settings.overrides_dir);
//! engine.init(&settings.overrides_dir);
//!
//! let hints = engine.resolve("com.example.storage.client.CrateScreen");
//! println!("suppressed: {}", hints.suppressed);
//! # Ok::<(), hints_core::Error>(())
//! ```

pub mod engine;
pub mod error;
pub mod metadata;
pub mod migration;
pub mod settings;

pub use engine::{HintsEngine, InitReport, MAX_HIERARCHY_DEPTH};
pub use error::{Error, Result};
pub use metadata::{GuiHintMarker, Marker, MetadataProvider, NoMetadata, StaticMetadata, TypeMetadata};
pub use migration::{MigrationReport, upgrade_legacy_config};
pub use settings::HintsSettings;

pub use hints_meta::{ButtonKind, ButtonPositionHint, HintRecord, LoadFailure};
