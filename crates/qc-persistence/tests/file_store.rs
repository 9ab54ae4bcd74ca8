//! File-backed preference store tests.

use std::fs;

use qc_persistence::{
    ColorScheme, FilePreferenceStore, FontSize, PersistenceError, PreferenceStore, Preferences,
    PreferencesController,
};
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults_without_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    let store = FilePreferenceStore::new(&path);

    assert!(store.try_load().unwrap().is_none());
    let prefs = PreferencesController::load(store);
    assert_eq!(*prefs.preferences(), Preferences::default());
    assert!(!path.exists());
}

#[test]
fn changes_survive_a_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config").join("preferences.toml");

    let mut prefs = PreferencesController::load(FilePreferenceStore::new(&path));
    prefs.toggle_theme().unwrap();
    prefs.set_font_size(FontSize::Sm).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("theme = \"light\""));
    assert!(text.contains("fontSize = \"sm\""));

    let reloaded = PreferencesController::load(FilePreferenceStore::new(&path));
    assert_eq!(reloaded.preferences().theme, ColorScheme::Light);
    assert_eq!(reloaded.preferences().font_size, FontSize::Sm);
    assert!(!reloaded.preferences().show_libras);
}

#[test]
fn corrupt_file_falls_back_and_is_repaired_on_change() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    fs::write(&path, "theme = 42\nfontSize = ").unwrap();

    let store = FilePreferenceStore::new(&path);
    assert!(matches!(
        store.try_load(),
        Err(PersistenceError::PersistedPreferenceCorrupt { .. })
    ));

    let mut prefs = PreferencesController::load(store);
    assert_eq!(*prefs.preferences(), Preferences::default());

    assert!(prefs.toggle_libras().unwrap());
    let repaired = FilePreferenceStore::new(&path).try_load().unwrap().unwrap();
    assert!(repaired.show_libras);
    assert_eq!(repaired.theme, ColorScheme::Dark);
}

#[test]
fn unreadable_path_reports_io_error() {
    let dir = tempdir().unwrap();
    // A directory cannot be read as a file.
    let store = FilePreferenceStore::new(dir.path());

    let err = store.try_load().unwrap_err();
    assert!(matches!(err, PersistenceError::Io { operation: "read", .. }));
    assert!(err.suggestion().is_some());
    assert_eq!(store.load(), Preferences::default());
}
