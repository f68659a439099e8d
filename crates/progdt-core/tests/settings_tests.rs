use std::fs;

use progdt_core::{FileSettings, ProgdtError, Settings, SettingsStore, TimeMode};
use tempfile::TempDir;

/// Helper function to create a settings store in a temporary directory
fn create_test_store() -> (TempDir, FileSettings) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let store = FileSettings::new(temp_dir.path().join("progdt").join("settings.json"));
    (temp_dir, store)
}

#[test]
fn test_missing_file_yields_defaults() {
    let (_temp_dir, store) = create_test_store();

    let settings = store.load().expect("Failed to load settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.time_mode(), TimeMode::Local);
    assert!(!store.path().exists());
}

#[test]
fn test_save_then_load() {
    let (_temp_dir, store) = create_test_store();

    store
        .save(&Settings { utc: true })
        .expect("Failed to save settings");

    assert!(store.path().exists());
    let settings = store.load().expect("Failed to load settings");
    assert!(settings.utc);

    let raw = fs::read_to_string(store.path()).expect("Failed to read file");
    assert!(raw.contains("\"utc\": true"));
}

#[test]
fn test_external_edits_are_seen_on_next_load() {
    let (_temp_dir, store) = create_test_store();
    store.save(&Settings::default()).expect("Failed to save");
    assert!(!store.load().unwrap().utc);

    fs::write(store.path(), r#"{ "utc": true }"#).expect("Failed to write");
    assert!(store.load().unwrap().utc);

    fs::write(store.path(), "").expect("Failed to write");
    assert!(!store.load().unwrap().utc);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let (_temp_dir, store) = create_test_store();
    store.save(&Settings::default()).expect("Failed to save");

    fs::write(store.path(), r#"{ "utc": true, "theme": "dark" }"#).expect("Failed to write");
    assert!(store.load().unwrap().utc);
}

#[test]
fn test_malformed_file_is_an_error() {
    let (_temp_dir, store) = create_test_store();
    store.save(&Settings::default()).expect("Failed to save");

    fs::write(store.path(), "utc = true").expect("Failed to write");
    assert!(matches!(
        store.load(),
        Err(ProgdtError::Serialization { .. })
    ));

    fs::write(store.path(), r#"{ "utc": "yes" }"#).expect("Failed to write");
    assert!(store.load().is_err());
}

#[test]
fn test_location_is_the_path() {
    let (_temp_dir, store) = create_test_store();
    assert!(store.location().ends_with("settings.json"));
}
