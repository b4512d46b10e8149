//! Workspace and logging configuration types.

use serde::{Deserialize, Serialize};

/// Settings for the slot-based workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Gap around and between panes in pixels (valid range: 0-64).
    pub gap_px: i32,
    /// Initial container width in pixels (valid range: 1-16384).
    pub width: i32,
    /// Initial container height in pixels (valid range: 1-16384).
    pub height: i32,
    /// Storage location for an isolated browsing environment. Unset means
    /// all workspace panes share one environment.
    pub isolation_path: Option<String>,
    pub block_popups: bool,
    pub disable_context_menu: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            gap_px: 6,
            width: 1280,
            height: 720,
            isolation_path: None,
            block_popups: true,
            disable_context_menu: true,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
