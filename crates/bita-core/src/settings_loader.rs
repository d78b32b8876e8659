//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `BITA_DEBUG` | `debug` |
//! | `BITA_LOG_LEVEL` | `log_level` |
//! | `BITA_SIMULATED_DELAY_MS` | `booking.simulated_delay_ms` and `contact.simulated_delay_ms` |
//! | `BITA_SUBMISSION_TIMEOUT_MS` | `booking.submission_timeout_ms` and `contact.submission_timeout_ms` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use bita_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("bita.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::BitaError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Keys missing from the document keep their default values, including
/// nested keys inside the per-form tables.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, BitaError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| BitaError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, BitaError> {
    from_toml_str(&read_config(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, BitaError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
pub fn from_json_str(json_str: &str) -> Result<Settings, BitaError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| BitaError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;

    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, BitaError> {
    from_json_str(&read_config(path.as_ref(), "JSON")?)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<Settings, BitaError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// Unparseable numeric values are ignored and leave the setting unchanged.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides(settings, |key| std::env::var(key).ok());
}

/// Applies overrides from an arbitrary key lookup.
fn apply_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("BITA_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Some(val) = lookup("BITA_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = lookup("BITA_SIMULATED_DELAY_MS") {
        if let Ok(ms) = val.parse::<u64>() {
            settings.booking.simulated_delay_ms = ms;
            settings.contact.simulated_delay_ms = ms;
        }
    }

    if let Some(val) = lookup("BITA_SUBMISSION_TIMEOUT_MS") {
        if let Ok(ms) = val.parse::<u64>() {
            settings.booking.submission_timeout_ms = Some(ms);
            settings.contact.submission_timeout_ms = Some(ms);
        }
    }
}

// ============================================================
// Helpers
// ============================================================

fn read_config(path: &Path, format: &str) -> Result<String, BitaError> {
    std::fs::read_to_string(path).map_err(|e| {
        BitaError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

fn merge_over_defaults(value: serde_json::Value, format: &str) -> Result<Settings, BitaError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        BitaError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        BitaError::ConfigurationError(format!("Failed to deserialize settings from {format}: {e}"))
    })
}

/// Re-expresses a parsed TOML document as JSON so it can be merged over the
/// serialized defaults.
///
/// Datetimes become their RFC 3339 text. Non-finite floats have no JSON form
/// and become `null`, which then fails deserialization of any numeric field.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    use serde_json::Value as Json;
    use toml::Value as Toml;

    match value {
        Toml::Table(table) => Json::Object(
            table
                .into_iter()
                .map(|(key, item)| (key, toml_to_json(item)))
                .collect(),
        ),
        Toml::Array(items) => items.into_iter().map(toml_to_json).collect(),
        Toml::Integer(n) => Json::from(n),
        Toml::Float(x) => serde_json::Number::from_f64(x).map_or(Json::Null, Json::Number),
        Toml::Boolean(flag) => Json::Bool(flag),
        Toml::String(text) => Json::String(text),
        Toml::Datetime(stamp) => Json::String(stamp.to_string()),
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}
