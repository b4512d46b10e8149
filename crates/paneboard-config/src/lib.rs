//! Paneboard configuration.
//!
//! Two documents are understood here: the workspace settings file
//! (`config.toml` in the platform config directory) and dashboard files,
//! which describe a fixed set of panes arranged by a layout template and
//! may be written in TOML or JSON. All sections use `serde(default)` so
//! partial files work.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    create_default_config, default_config_path, load_dashboard, load_default, load_from_path,
    parse_dashboard_json, parse_dashboard_toml,
};
pub use schema::{
    AppConfig, DashboardConfig, InjectionConfig, LayoutConfig, LoggingConfig, NavigationConfig,
    PaneConfig, PaneboardConfig, UiConfig, WorkspaceConfig,
};

use paneboard_common::ConfigError;

/// Load the workspace config from the platform default path and validate it.
///
/// Unlike [`load_default`], a config that fails validation is an error here.
pub fn load_config() -> Result<PaneboardConfig, ConfigError> {
    let config = loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize any config document to pretty-printed JSON.
pub fn config_to_json<T: serde::Serialize>(config: &T) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
