//! File-backed settings store tests

use proctorlab_core::{FileSettingsStore, SettingsStore};

#[test]
fn values_survive_reopening_the_store() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    {
        let mut store = FileSettingsStore::with_path(&path);
        store.set_float("main_split_position", 0.42);
        store.set_string("last_screen", "materials_testing");
    }

    let store = FileSettingsStore::with_path(&path);
    assert!((store.get_float("main_split_position", 0.0) - 0.42).abs() < f64::EPSILON);
    assert_eq!(store.get_string("last_screen", ""), "materials_testing");
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = FileSettingsStore::with_path(dir.path().join("nope.toml"));
    assert!((store.get_float("main_split_position", 0.25) - 0.25).abs() < f64::EPSILON);
    assert_eq!(store.get_string("theme", "dark"), "dark");
}

#[test]
fn malformed_file_is_treated_as_empty() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "this is { not toml").expect("write garbage");

    let store = FileSettingsStore::with_path(&path);
    assert!((store.get_float("main_split_position", 0.25) - 0.25).abs() < f64::EPSILON);
}

#[test]
fn set_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("deeper").join("settings.toml");

    let mut store = FileSettingsStore::with_path(&path);
    store.set_float("right_vertical_split_position", 0.6);

    assert!(path.exists());
    let reopened = FileSettingsStore::with_path(&path);
    assert!((reopened.get_float("right_vertical_split_position", 0.0) - 0.6).abs() < f64::EPSILON);
}

#[test]
fn later_writes_overwrite_earlier_ones() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    let mut store = FileSettingsStore::with_path(&path);
    store.set_float("main_split_position", 0.3);
    store.set_float("main_split_position", 0.7);

    let reopened = FileSettingsStore::with_path(&path);
    assert!((reopened.get_float("main_split_position", 0.0) - 0.7).abs() < f64::EPSILON);
}

#[test]
fn explicit_save_reports_unwritable_location() {
    let store = FileSettingsStore::with_path("/proc/definitely/not/writable/settings.toml");
    assert!(store.save().is_err());
}
