//! System Configuration Integration Tests
//!
//! Tests for:
//! - Default behavior with missing directories and files
//! - Session settings loaded from `session.json`
//! - Uniqueness of generated user node names

use std::fs;
use std::path::PathBuf;

use arbor::config::SystemConfig;
use uuid::Uuid;

/// Fresh empty directory under the system temp dir.
fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arbor-config-{}", Uuid::new_v4().simple()));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn missing_dir_yields_defaults() {
    let config = SystemConfig::load(std::path::Path::new("definitely-not-here"))
        .expect("defaults load without the directory");

    assert_eq!(config.session().participant(), "local");
    assert!(
        config
            .session()
            .generated_unique_user_node_name()
            .starts_with("user-")
    );
}

#[test]
fn empty_dir_yields_defaults() {
    let dir = scratch_dir();
    let config = SystemConfig::load(&dir).expect("defaults load from an empty dir");

    assert_eq!(config.session().participant(), "local");

    let _ = fs::remove_dir_all(dir);
}

// ============================================================================
// session.json
// ============================================================================

#[test]
fn prefix_and_participant_come_from_file() {
    let dir = scratch_dir();
    fs::write(
        dir.join("session.json"),
        r#"{ "user_node_prefix": "host-user", "participant": "host" }"#,
    )
    .expect("write session file");

    let config = SystemConfig::load(&dir).expect("settings load");

    assert_eq!(config.session().participant(), "host");
    assert!(
        config
            .session()
            .generated_unique_user_node_name()
            .starts_with("host-user-")
    );

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn partial_file_fills_missing_fields_with_defaults() {
    let dir = scratch_dir();
    fs::write(dir.join("session.json"), r#"{ "participant": "guest" }"#)
        .expect("write session file");

    let config = SystemConfig::load(&dir).expect("settings load");

    assert_eq!(config.session().participant(), "guest");
    assert!(
        config
            .session()
            .generated_unique_user_node_name()
            .starts_with("user-")
    );

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn malformed_session_file_is_an_error() {
    let dir = scratch_dir();
    fs::write(dir.join("session.json"), "not json at all").expect("write session file");

    assert!(SystemConfig::load(&dir).is_err());

    let _ = fs::remove_dir_all(dir);
}

// ============================================================================
// Generated Names & Paths
// ============================================================================

#[test]
fn generated_names_are_unique_per_load() {
    let dir = scratch_dir();

    let a = SystemConfig::load(&dir).unwrap();
    let b = SystemConfig::load(&dir).unwrap();

    assert_ne!(
        a.session().generated_unique_user_node_name(),
        b.session().generated_unique_user_node_name(),
        "every engine start gets its own user node name"
    );

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn folder_path_records_source_dir() {
    let dir = scratch_dir();
    let config = SystemConfig::load(&dir).unwrap();
    assert_eq!(config.folder_path(), dir.as_path());

    let _ = fs::remove_dir_all(dir);
}
