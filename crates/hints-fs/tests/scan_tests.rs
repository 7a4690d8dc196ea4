use hints_fs::find_config_files;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn names(paths: Vec<std::path::PathBuf>) -> Vec<String> {
    let mut names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_missing_directory_yields_nothing() {
    let temp = TempDir::new().unwrap();
    let files = find_config_files(&temp.path().join("absent")).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_regular_file_path_yields_nothing() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("hints.json");
    fs::write(&file, "{}").unwrap();

    let files = find_config_files(&file).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_only_config_files_are_listed() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.json"), "{}").unwrap();
    fs::write(temp.path().join("B.JSON"), "{}").unwrap();
    fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
    fs::write(temp.path().join("backup.json.bak"), "{}").unwrap();

    let files = find_config_files(temp.path()).unwrap();
    assert_eq!(names(files), vec!["B.JSON", "a.json"]);
}

#[test]
fn test_nested_directories_are_not_descended() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("nested");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("deep.json"), "{}").unwrap();
    fs::write(temp.path().join("top.json"), "{}").unwrap();

    let files = find_config_files(temp.path()).unwrap();
    assert_eq!(names(files), vec!["top.json"]);
}

#[rstest]
#[case("dir.json")]
#[case("DIR.Json")]
fn test_directories_with_config_extension_are_skipped(#[case] dir_name: &str) {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(dir_name)).unwrap();

    let files = find_config_files(temp.path()).unwrap();
    assert!(files.is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_files_are_followed() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let target = elsewhere.path().join("shared.json");
    fs::write(&target, "{}").unwrap();
    std::os::unix::fs::symlink(&target, temp.path().join("linked.json")).unwrap();
    std::os::unix::fs::symlink(
        elsewhere.path().join("missing.json"),
        temp.path().join("dangling.json"),
    )
    .unwrap();

    let files = find_config_files(temp.path()).unwrap();
    assert_eq!(names(files), vec!["linked.json"]);
}
