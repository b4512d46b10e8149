//! Dashboard document loading (TOML or JSON).
//!
//! JSON dashboards commonly use PascalCase or camelCase keys, so object keys
//! are folded to snake_case before deserializing.

use std::path::Path;

use paneboard_common::ConfigError;
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::loader::read_document;
use crate::schema::DashboardConfig;
use crate::validation;

/// Load a dashboard from `path`. Files ending in `.json` are parsed as JSON,
/// everything else as TOML.
///
/// A dashboard that fails validation is logged and returned as parsed.
pub fn load_dashboard(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let content = read_document(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        parse_dashboard_json(&content)?
    } else {
        parse_dashboard_toml(&content)?
    };

    if let Err(e) = validation::validate_dashboard(&config) {
        warn!(path = %path.display(), "dashboard validation warning: {e}");
    }

    info!(
        panes = config.panes.len(),
        layout = %config.layout.id,
        "loaded dashboard from {}",
        path.display()
    );
    Ok(config)
}

pub fn parse_dashboard_toml(content: &str) -> Result<DashboardConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Parse a JSON dashboard. Keys match case-insensitively across snake_case,
/// camelCase and PascalCase. A `null` document yields the defaults.
pub fn parse_dashboard_json(content: &str) -> Result<DashboardConfig, ConfigError> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}")))?;

    if value.is_null() {
        return Ok(DashboardConfig::default());
    }

    serde_json::from_value(fold_keys(value))
        .map_err(|e| ConfigError::ParseError(format!("invalid dashboard: {e}")))
}

fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (snake_case(&key), fold_keys(value)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// `UserDataFolder` / `userDataFolder` / `user_data_folder` -> `user_data_folder`.
fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}
