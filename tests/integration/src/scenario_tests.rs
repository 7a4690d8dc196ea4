//! End-to-end scenarios for host startup and resolution
//!
//! Each test drives the engine the way a host does: migrate, init, then
//! resolve many identifiers against a type catalog.

use hints_core::{
    ButtonKind, ButtonPositionHint, GuiHintMarker, HintRecord, HintsEngine, HintsSettings,
    NoMetadata, StaticMetadata, TypeMetadata,
};
use hints_fs::HintFile;
use hints_meta::{BUILTIN_HINTS_RESOURCE, EXAMPLE_HINTS_RESOURCE, MemoryResources};
use hints_test_utils::HintsDir;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn resources() -> MemoryResources {
    MemoryResources::new()
        .with(
            BUILTIN_HINTS_RESOURCE,
            serde_json::to_vec(&json!({
                "mods": {
                    "com.example.Foo": {"ignored": true},
                    "com.example.Baz": {"buttonHints": {"SORT": {"top": 1}}}
                },
                "host": {
                    "com.example.host.Creative": {"ignore": true}
                }
            }))
            .unwrap(),
        )
        .with(EXAMPLE_HINTS_RESOURCE, "{}")
}

fn catalog() -> StaticMetadata {
    StaticMetadata::new()
        .with_type("com.example.Container", TypeMetadata::new().ignored())
        .with_type(
            "com.example.ModChest",
            TypeMetadata::new().extends("com.example.Container"),
        )
        .with_type(
            "com.example.Baz",
            TypeMetadata::new().extends("com.example.Container"),
        )
        .with_type(
            "com.example.Backpack",
            TypeMetadata::new()
                .player_side_only()
                .gui_hint(GuiHintMarker::new(ButtonKind::MoveToPlayer).offsets(2, -1, 0)),
        )
}

#[test]
fn forced_override_wins_over_ignored_default() {
    let dir = HintsDir::new();
    dir.write_json("a.json", &json!({"com.example.Foo": {"force": true}}));
    let mut engine = HintsEngine::with_resources(NoMetadata, resources());

    engine.init(dir.path());
    let record = engine.resolve("com.example.Foo");

    assert!(!record.suppressed);
    assert!(record.forced);
}

#[test]
fn malformed_file_does_not_hide_valid_one() {
    let dir = HintsDir::new();
    dir.write_raw("bad.json", "{{{");
    dir.write_json("good.json", &json!({"com.example.Bar": {"playerSideOnly": true}}));
    let mut engine = HintsEngine::with_resources(NoMetadata, resources());

    let report = engine.init(dir.path());

    assert_eq!(report.failures.len(), 1);
    let bar = engine.resolve("com.example.Bar");
    assert!(bar.player_side_only);
    assert_eq!(bar.provenance(), "good.json");
}

#[test]
fn migration_without_legacy_file_is_a_no_op() {
    let dir = HintsDir::new();
    dir.write_raw(HintFile::Example.as_str(), "{}");
    let engine = HintsEngine::with_resources(NoMetadata, resources());

    let report = engine.upgrade_legacy_config(&dir.root().join("gone.json"), dir.path());

    assert!(!report.changed_anything());
    assert_eq!(dir.file_names(), vec![HintFile::Example.to_string()]);
}

#[test]
fn host_startup_flow() {
    let dir = HintsDir::new();
    let settings = HintsSettings::new(dir.root()).with_overrides_dir(dir.path());
    std::fs::write(
        &settings.legacy_file,
        r#"{"com.example.ModChest": {"buttonHints": {"SORT_ROWS": {"hide": true}}}}"#,
    )
    .unwrap();
    let mut engine = HintsEngine::with_resources(catalog(), resources());

    let migration = engine.upgrade_legacy_config(&settings.legacy_file, &settings.overrides_dir);
    let report = engine.init(&settings.overrides_dir);

    assert!(migration.legacy_moved && migration.example_written);
    assert!(report.is_clean());
    assert_eq!(report.external, 1);
    assert_eq!(report.internal, 3);

    // Migrated override beats the inherited ignore marker
    let chest = engine.resolve("com.example.ModChest");
    assert!(!chest.suppressed);
    assert_eq!(
        chest.button_hint(ButtonKind::SortRows),
        Some(&ButtonPositionHint::new(0, 0, 0, true))
    );
    assert_eq!(chest.provenance(), HintFile::UpgradedLegacy.as_str());

    // Defaults record without direct markers stands
    let baz = engine.resolve("com.example.Baz");
    assert!(!baz.suppressed);
    assert!(baz.button_hint(ButtonKind::Sort).is_some());

    // Metadata fills the gaps
    let backpack = engine.resolve("com.example.Backpack");
    assert!(backpack.player_side_only);
    assert!(engine.is_player_side_only(Some("com.example.Backpack")));
    assert_eq!(
        backpack.button_hint(ButtonKind::MoveToPlayer),
        Some(&ButtonPositionHint::new(2, -1, 0, false))
    );

    let nothing = engine.resolve("com.example.Plain");
    assert!(Arc::ptr_eq(&nothing, &HintRecord::no_hints()));
}

#[test]
fn independent_engines_do_not_share_state() {
    let first_dir = HintsDir::new();
    first_dir.write_json("a.json", &json!({"com.example.Shared": {"ignore": true}}));
    let second_dir = HintsDir::new();

    let mut first = HintsEngine::with_resources(NoMetadata, resources());
    let mut second = HintsEngine::with_resources(NoMetadata, resources());
    first.init(first_dir.path());
    second.init(second_dir.path());

    assert!(first.resolve("com.example.Shared").suppressed);
    assert!(HintRecord::is_no_hints(&second.resolve("com.example.Shared")));
}
