//! Panel layout persistence tests
//!
//! Simulates the application life cycle: build a layout over a settings
//! file, drag dividers, tear it down, and verify a fresh layout over the
//! same file picks the fractions back up.

use std::path::Path;

use proctorlab_core::{DividerId, FileSettingsStore, PanelLayout};

fn layout_over(path: &Path) -> PanelLayout {
    PanelLayout::new(Box::new(FileSettingsStore::with_path(path)))
}

#[test]
fn dragged_fractions_survive_a_restart() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    {
        let mut layout = layout_over(&path);
        layout.begin_drag(DividerId::Main, 1000.0);
        let fraction = layout.drag_to(DividerId::Main, 300.0, 0.0);
        assert_eq!(fraction, Some(0.4));
        layout.end_drag(DividerId::Main);
    }

    let restarted = layout_over(&path);
    assert!((restarted.fraction(DividerId::Main) - 0.4).abs() < 1e-9);
    // Untouched dividers still come up with their defaults.
    assert!((restarted.fraction(DividerId::RightVertical) - 0.5).abs() < f64::EPSILON);
}

#[test]
fn every_accepted_update_is_persisted_immediately() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    let mut layout = layout_over(&path);
    layout.begin_drag(DividerId::RightVertical, 800.0);
    let fraction = layout.drag_to(DividerId::RightVertical, 0.0, 80.0);
    assert_eq!(fraction, Some(0.55));

    // Read the file through a second store while the drag is still open.
    let observer = FileSettingsStore::with_path(&path);
    use proctorlab_core::SettingsStore;
    assert!(
        (observer.get_float(DividerId::RightVertical.settings_key(), 0.0) - 0.55).abs() < 1e-9
    );

    layout.end_drag(DividerId::RightVertical);
}

#[test]
fn persist_all_writes_defaults_for_untouched_dividers() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    let mut layout = layout_over(&path);
    layout.persist_all();
    drop(layout);

    let restarted = layout_over(&path);
    for id in DividerId::ALL {
        assert!((restarted.fraction(id) - id.default_fraction()).abs() < f64::EPSILON);
    }
}

#[test]
fn hand_edited_out_of_range_fraction_is_clamped_on_load() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "main_split_position = 1.7\n").expect("write settings");

    let layout = layout_over(&path);
    assert!((layout.fraction(DividerId::Main) - 0.9).abs() < f64::EPSILON);
}

#[test]
fn independent_dividers_persist_independently() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    {
        let mut layout = layout_over(&path);
        layout.begin_drag(DividerId::TopHorizontal, 1000.0);
        let _ = layout.drag_to(DividerId::TopHorizontal, 200.0, 0.0);
        layout.end_drag(DividerId::TopHorizontal);

        layout.begin_drag(DividerId::BottomHorizontal, 1000.0);
        let _ = layout.drag_to(DividerId::BottomHorizontal, -200.0, 0.0);
        layout.end_drag(DividerId::BottomHorizontal);
    }

    let restarted = layout_over(&path);
    assert!((restarted.fraction(DividerId::TopHorizontal) - 0.6).abs() < 1e-9);
    assert!((restarted.fraction(DividerId::BottomHorizontal) - 0.4).abs() < 1e-9);
}
