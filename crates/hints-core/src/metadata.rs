//! Host metadata capability
//!
//! The resolver falls back to markers attached to a type's own definition
//! when no config source mentions it. Hosts expose those markers through
//! [`MetadataProvider`].

use hints_meta::{ButtonKind, ButtonPositionHint};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::{Error, Result};

/// Markers the resolver inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Skip the integration; inherited by subtypes
    Ignore,
    /// Integration applies only in the player-private context
    PlayerSideOnly,
    /// Control placement hint; may occur several times on one type
    GuiHint,
}

impl Marker {
    /// Markers whose direct presence overrides a cached, non-forced record.
    pub const DIRECT: [Marker; 3] = [Marker::Ignore, Marker::PlayerSideOnly, Marker::GuiHint];
}

/// One gui-hint marker occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuiHintMarker {
    pub button: ButtonKind,
    #[serde(default, rename = "horizontalOffset")]
    pub horizontal_offset: i32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub bottom: i32,
    #[serde(default)]
    pub hide: bool,
}

impl GuiHintMarker {
    pub fn new(button: ButtonKind) -> Self {
        Self {
            button,
            horizontal_offset: 0,
            top: 0,
            bottom: 0,
            hide: false,
        }
    }

    pub fn offsets(mut self, horizontal_offset: i32, top: i32, bottom: i32) -> Self {
        self.horizontal_offset = horizontal_offset;
        self.top = top;
        self.bottom = bottom;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }

    pub fn position(&self) -> ButtonPositionHint {
        ButtonPositionHint::new(self.horizontal_offset, self.top, self.bottom, self.hide)
    }
}

/// Marker queries against the host's type system.
///
/// Implementations must be cheap enough to call on every cache miss. To
/// share one engine across threads the provider must be `Sync`.
pub trait MetadataProvider {
    /// Whether `id` itself carries `marker` (no inheritance).
    fn has_marker(&self, id: &str, marker: Marker) -> bool;

    /// Direct supertype of `id`, or `None` once the parent would be the
    /// root object type (or `id` is unknown).
    fn superclass(&self, id: &str) -> Option<String>;

    /// Every gui-hint occurrence attached directly to `id`, in declaration
    /// order.
    fn gui_hints(&self, id: &str) -> Vec<GuiHintMarker>;
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for &T {
    fn has_marker(&self, id: &str, marker: Marker) -> bool {
        (**self).has_marker(id, marker)
    }

    fn superclass(&self, id: &str) -> Option<String> {
        (**self).superclass(id)
    }

    fn gui_hints(&self, id: &str) -> Vec<GuiHintMarker> {
        (**self).gui_hints(id)
    }
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for Arc<T> {
    fn has_marker(&self, id: &str, marker: Marker) -> bool {
        (**self).has_marker(id, marker)
    }

    fn superclass(&self, id: &str) -> Option<String> {
        (**self).superclass(id)
    }

    fn gui_hints(&self, id: &str) -> Vec<GuiHintMarker> {
        (**self).gui_hints(id)
    }
}

/// A host with no marker metadata at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetadata;

impl MetadataProvider for NoMetadata {
    fn has_marker(&self, _id: &str, _marker: Marker) -> bool {
        false
    }

    fn superclass(&self, _id: &str) -> Option<String> {
        None
    }

    fn gui_hints(&self, _id: &str) -> Vec<GuiHintMarker> {
        Vec::new()
    }
}

/// Markers and parent link of one type in a [`StaticMetadata`] catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMetadata {
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub ignore: bool,
    #[serde(default)]
    pub player_side_only: bool,
    #[serde(default)]
    pub gui_hints: Vec<GuiHintMarker>,
}

impl TypeMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    pub fn player_side_only(mut self) -> Self {
        self.player_side_only = true;
        self
    }

    pub fn gui_hint(mut self, hint: GuiHintMarker) -> Self {
        self.gui_hints.push(hint);
        self
    }
}

/// An in-memory type catalog.
///
/// Used where the host cannot be queried directly, e.g. by the CLI, which
/// reads one from JSON:
///
/// ```json
/// {
///   "types": {
///     "com.example.BaseScreen": { "ignore": true },
///     "com.example.ChestScreen": {
///       "parent": "com.example.BaseScreen",
///       "guiHints": [{ "button": "SORT", "top": 4 }]
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticMetadata {
    #[serde(default)]
    types: HashMap<String, TypeMetadata>,
}

impl StaticMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type, replacing any earlier entry for `id`.
    pub fn with_type(mut self, id: impl Into<String>, metadata: TypeMetadata) -> Self {
        self.types.insert(id.into(), metadata);
        self
    }

    /// Read a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = hints_fs::io::read_bytes(path)?;
        serde_json::from_slice(&bytes).map_err(|e| Error::InvalidCatalog {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn get(&self, id: &str) -> Option<&TypeMetadata> {
        self.types.get(id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl MetadataProvider for StaticMetadata {
    fn has_marker(&self, id: &str, marker: Marker) -> bool {
        self.get(id).is_some_and(|ty| match marker {
            Marker::Ignore => ty.ignore,
            Marker::PlayerSideOnly => ty.player_side_only,
            Marker::GuiHint => !ty.gui_hints.is_empty(),
        })
    }

    fn superclass(&self, id: &str) -> Option<String> {
        self.get(id).and_then(|ty| ty.parent.clone())
    }

    fn gui_hints(&self, id: &str) -> Vec<GuiHintMarker> {
        self.get(id)
            .map(|ty| ty.gui_hints.clone())
            .unwrap_or_default()
    }
}
