//! Dashboard document types.
//!
//! A dashboard is a fixed list of panes arranged by one layout template.
//! Layout ids and navigation modes stay as strings here and are interpreted
//! case-insensitively by the consumers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub app: AppConfig,
    pub layout: LayoutConfig,
    pub panes: Vec<PaneConfig>,
}

/// Window-level settings for a dashboard.
///
/// `fullscreen`, `always_on_top` and `overlay_hotkey` are read by the
/// presentation layer that owns the window; pane hosting only uses `gap_px`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub fullscreen: bool,
    pub always_on_top: bool,
    pub overlay_hotkey: String,
    /// Gap in pixels (valid range: 0-64).
    pub gap_px: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fullscreen: true,
            always_on_top: true,
            overlay_hotkey: "Ctrl+Shift+O".into(),
            gap_px: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// QUAD, HALF or MIX_3.
    pub id: String,
    /// Horizontal or Vertical. Only meaningful for HALF.
    pub orientation: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            id: "QUAD".into(),
            orientation: "Vertical".into(),
        }
    }
}

/// One dashboard pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    pub id: String,
    pub url: String,
    /// Zoom factor; zero or negative means 1.0 (valid range: 0.0-5.0).
    pub zoom: f64,
    pub navigation: Option<NavigationConfig>,
    pub ui: Option<UiConfig>,
    pub injection: Option<InjectionConfig>,
    /// Isolated storage location. Unset means the shared environment.
    pub user_data_folder: Option<String>,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            url: String::new(),
            zoom: 1.0,
            navigation: None,
            ui: None,
            injection: None,
            user_data_folder: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// `allow` or `whitelist`.
    pub mode: String,
    pub hosts: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            mode: "allow".into(),
            hosts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub disable_context_menu: bool,
    pub block_popups: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectionConfig {
    pub css: Option<String>,
    pub js: Option<String>,
}
