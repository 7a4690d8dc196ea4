//! Hint record schema - loaded from override files and built-in defaults
//!
//! A hint record tells the host how to integrate with one type: skip it
//! entirely, restrict it to the player-private context, or move/hide
//! individual controls.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "com.example.storage.CrateScreen": {
//!     "playerSideOnly": true,
//!     "buttonHints": {
//!       "SORT": { "horizontalOffset": -12, "top": 2 },
//!       "SETTINGS": { "hide": true }
//!     }
//!   },
//!   "com.example.machines.Furnace": { "ignore": true }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Identifier → record, as produced by one config source.
pub type ConfigMapping = HashMap<String, Arc<HintRecord>>;

static NO_HINTS: LazyLock<Arc<HintRecord>> = LazyLock::new(|| {
    Arc::new(HintRecord {
        forced: true,
        ..HintRecord::default()
    })
});

/// Controls whose placement can be adjusted by a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonKind {
    Sort,
    SortColumns,
    SortRows,
    MoveToContainer,
    MoveToPlayer,
    ContinuousCrafting,
    ProfileSelector,
    ShowEditor,
    Settings,
}

impl ButtonKind {
    /// Every control kind, in declaration order.
    pub const ALL: [ButtonKind; 9] = [
        ButtonKind::Sort,
        ButtonKind::SortColumns,
        ButtonKind::SortRows,
        ButtonKind::MoveToContainer,
        ButtonKind::MoveToPlayer,
        ButtonKind::ContinuousCrafting,
        ButtonKind::ProfileSelector,
        ButtonKind::ShowEditor,
        ButtonKind::Settings,
    ];

    /// Name as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonKind::Sort => "SORT",
            ButtonKind::SortColumns => "SORT_COLUMNS",
            ButtonKind::SortRows => "SORT_ROWS",
            ButtonKind::MoveToContainer => "MOVE_TO_CONTAINER",
            ButtonKind::MoveToPlayer => "MOVE_TO_PLAYER",
            ButtonKind::ContinuousCrafting => "CONTINUOUS_CRAFTING",
            ButtonKind::ProfileSelector => "PROFILE_SELECTOR",
            ButtonKind::ShowEditor => "SHOW_EDITOR",
            ButtonKind::Settings => "SETTINGS",
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement override for a single control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonPositionHint {
    #[serde(default, rename = "horizontalOffset")]
    pub horizontal_offset: i32,
    #[serde(default, rename = "top", alias = "topOffset")]
    pub top_offset: i32,
    #[serde(default, rename = "bottom", alias = "bottomOffset")]
    pub bottom_offset: i32,
    #[serde(default, rename = "hide", alias = "hidden")]
    pub hidden: bool,
}

impl ButtonPositionHint {
    pub fn new(horizontal_offset: i32, top_offset: i32, bottom_offset: i32, hidden: bool) -> Self {
        Self {
            horizontal_offset,
            top_offset,
            bottom_offset,
            hidden,
        }
    }
}

/// The resolved hint set for one identifier.
///
/// Records are shared as `Arc<HintRecord>` once they enter a mapping and are
/// never mutated afterwards. The provenance is stamped by the loader that
/// produced the record, before it is shared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HintRecord {
    /// Skip the integration for this type entirely
    ///
    /// Read from `ignore`, or from the older `ignored` spelling. The two keys
    /// name the same field: a record carrying both fails with a duplicate
    /// field error, and the whole source it came from is rejected.
    #[serde(default, rename = "ignore", alias = "ignored")]
    pub suppressed: bool,
    /// Integration applies only in the player-private context
    #[serde(default, rename = "playerSideOnly")]
    pub player_side_only: bool,
    /// Per-control placement overrides
    #[serde(default, rename = "buttonHints")]
    pub button_hints: BTreeMap<ButtonKind, ButtonPositionHint>,
    /// Never replaced by a metadata-derived record, even when empty
    #[serde(default, rename = "force")]
    pub forced: bool,
    #[serde(skip)]
    provenance: String,
}

impl HintRecord {
    /// Build a non-forced record from collected hint values.
    pub fn new(
        suppressed: bool,
        player_side_only: bool,
        button_hints: BTreeMap<ButtonKind, ButtonPositionHint>,
    ) -> Self {
        Self {
            suppressed,
            player_side_only,
            button_hints,
            forced: false,
            provenance: String::new(),
        }
    }

    /// The shared "no hints" record.
    ///
    /// Every call returns the same allocation, so callers can compare with
    /// [`Arc::ptr_eq`].
    pub fn no_hints() -> Arc<HintRecord> {
        Arc::clone(&NO_HINTS)
    }

    /// Whether `record` is the shared "no hints" record.
    pub fn is_no_hints(record: &Arc<HintRecord>) -> bool {
        Arc::ptr_eq(record, &NO_HINTS)
    }

    /// Stamp the source this record came from.
    pub fn with_provenance(mut self, provenance: impl Into<String>) -> Self {
        self.provenance = provenance.into();
        self
    }

    /// File name or identifier of the source that produced this record.
    pub fn provenance(&self) -> &str {
        &self.provenance
    }

    /// Whether any hint is actually set.
    pub fn has_hints(&self) -> bool {
        self.suppressed || self.player_side_only || !self.button_hints.is_empty()
    }

    pub fn button_hint(&self, kind: ButtonKind) -> Option<&ButtonPositionHint> {
        self.button_hints.get(&kind)
    }
}
