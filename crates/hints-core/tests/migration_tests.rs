//! Tests for legacy config migration

use hints_core::{HintsEngine, NoMetadata, upgrade_legacy_config};
use hints_fs::HintFile;
use hints_meta::{EXAMPLE_HINTS_RESOURCE, MemoryResources, PackagedResources};
use hints_test_utils::HintsDir;
use std::fs;
use std::time::SystemTime;

#[test]
fn test_legacy_file_is_moved_and_example_written() {
    let dir = HintsDir::new();
    let legacy = dir.write_root_file("integration-hints.json", r#"{"com.example.Old": {"ignore": true}}"#);

    let report = upgrade_legacy_config(&legacy, dir.path(), &PackagedResources);

    assert!(report.legacy_moved);
    assert!(report.example_written);
    assert!(!legacy.exists());
    assert_eq!(
        dir.file_names(),
        vec![HintFile::Example.to_string(), HintFile::UpgradedLegacy.to_string()]
    );
    assert_eq!(
        dir.read(HintFile::UpgradedLegacy.as_str()),
        r#"{"com.example.Old": {"ignore": true}}"#
    );
}

#[test]
fn test_example_is_copied_verbatim() {
    let dir = HintsDir::new();
    let resources = MemoryResources::new().with(EXAMPLE_HINTS_RESOURCE, "{\"x\": {}}\n");

    upgrade_legacy_config(&dir.root().join("absent.json"), dir.path(), &resources);

    assert_eq!(dir.read(HintFile::Example.as_str()), "{\"x\": {}}\n");
}

#[test]
fn test_no_legacy_file_and_existing_example_writes_nothing() {
    let dir = HintsDir::new();
    let example = dir.write_raw(HintFile::Example.as_str(), "user edited");
    let before = fs::metadata(&example).unwrap().modified().unwrap_or(SystemTime::UNIX_EPOCH);

    let report = upgrade_legacy_config(&dir.root().join("absent.json"), dir.path(), &PackagedResources);

    assert!(!report.changed_anything());
    assert_eq!(dir.file_names(), vec![HintFile::Example.to_string()]);
    assert_eq!(dir.read(HintFile::Example.as_str()), "user edited");
    let after = fs::metadata(&example).unwrap().modified().unwrap_or(SystemTime::UNIX_EPOCH);
    assert_eq!(before, after);
}

#[test]
fn test_creates_missing_overrides_dir() {
    let dir = HintsDir::new();
    let legacy = dir.write_root_file("old.json", "{}");
    let target = dir.root().join("fresh").join("hints");

    let report = upgrade_legacy_config(&legacy, &target, &PackagedResources);

    assert!(report.legacy_moved);
    assert!(target.join(HintFile::UpgradedLegacy).is_file());
    assert!(target.join(HintFile::Example).is_file());
}

#[test]
fn test_migrated_file_is_loaded_by_init() {
    let dir = HintsDir::new();
    let legacy = dir.write_root_file(
        "integration-hints.json",
        r#"{"com.example.Legacy": {"playerSideOnly": true}}"#,
    );
    let mut engine = HintsEngine::with_resources(NoMetadata, PackagedResources);

    engine.upgrade_legacy_config(&legacy, dir.path());
    let report = engine.init(dir.path());

    assert!(report.is_clean());
    let record = engine.resolve("com.example.Legacy");
    assert!(record.player_side_only);
    assert_eq!(record.provenance(), HintFile::UpgradedLegacy.as_str());
    assert!(engine.external().contains_key("com.example.mymod.client.ConfigScreen"));
}
