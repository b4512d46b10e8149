//! Settings file loading.

use std::io;
use std::path::Path;

use paneboard_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::PaneboardConfig;
use crate::validation;

/// Read a config document, mapping a missing file to `FileNotFound`.
pub(super) fn read_document(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })
}

/// Parse the settings file at `path`.
///
/// Absent fields keep their defaults. Out-of-range values are reported as a
/// warning and the document is returned as written.
pub fn load_from_path(path: &Path) -> Result<PaneboardConfig, ConfigError> {
    let content = read_document(path)?;
    let config: PaneboardConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    match validation::validate(&config) {
        Ok(()) => info!(path = %path.display(), "config loaded"),
        Err(e) => warn!(path = %path.display(), "config loaded with problems: {e}"),
    }
    Ok(config)
}

/// Load the settings file from [`default_config_path`], writing the
/// commented default first when there is none.
pub fn load_default() -> Result<PaneboardConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(PaneboardConfig::default())
        }
        other => other,
    }
}
