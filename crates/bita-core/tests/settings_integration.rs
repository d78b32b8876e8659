//! Integration tests for loading site settings from files.

use std::time::Duration;

use bita_core::settings_loader::{from_json_file, from_toml_file, from_toml_str};
use bita_core::{BitaError, Settings, SuccessDisplay};

const DEMO_CONFIG: &str = include_str!("../../../demos/booking/bita.toml");

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("bita-core-{}-{name}", std::process::id()))
}

#[test]
fn test_demo_config_parses() {
    let settings = from_toml_str(DEMO_CONFIG).unwrap();

    assert_eq!(settings.booking.simulated_delay(), Duration::from_millis(1500));
    assert_eq!(settings.contact.simulated_delay(), Duration::from_millis(1000));
    assert_eq!(settings.booking.success_display, SuccessDisplay::Sticky);
    assert_eq!(
        settings.booking.submission_timeout(),
        Some(Duration::from_secs(10))
    );
    assert_eq!(
        settings.contact.success_display.dismiss_after(),
        Some(Duration::from_secs(5))
    );
    // Messages were not in the file and keep their defaults.
    assert_eq!(settings.booking.success_message, "ההזמנה נשלחה בהצלחה!");
}

#[test]
fn test_toml_file_round_trip() {
    let path = temp_path("settings.toml");
    std::fs::write(&path, "debug = false\n[contact]\nsubmission_timeout_ms = 250\n").unwrap();

    let settings = from_toml_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(!settings.debug);
    assert_eq!(settings.contact.submission_timeout_ms, Some(250));
    assert_eq!(settings.booking.submission_timeout_ms, None);
}

#[test]
fn test_json_file_matches_serialized_defaults() {
    let path = temp_path("settings.json");
    let defaults = Settings::default();
    std::fs::write(&path, serde_json::to_string(&defaults).unwrap()).unwrap();

    let settings = from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(settings.booking, defaults.booking);
    assert_eq!(settings.contact, defaults.contact);
    assert_eq!(settings.log_level, defaults.log_level);
}

#[test]
fn test_missing_file_is_configuration_error() {
    let err = from_toml_file(temp_path("does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, BitaError::ConfigurationError(_)));
}
