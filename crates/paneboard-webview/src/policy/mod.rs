//! Per-pane browsing policy: address handling, navigation filtering,
//! injected scripts, popups, context menus, zoom and environment isolation.

mod address;
mod injection;
mod navigation;

pub use address::{addresses_match, normalize_address, AddressError};
pub use injection::css_injection_script;
pub use navigation::NavigationFilter;

use paneboard_config::{PaneConfig, WorkspaceConfig};

use crate::environment::ResourceKey;

/// Everything a [`PaneHost`](crate::PaneHost) applies before first
/// navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct PanePolicy {
    pub navigation: NavigationFilter,
    pub block_popups: bool,
    /// Whether the engine's default context menus stay enabled.
    pub context_menus: bool,
    pub zoom: f64,
    pub css: Option<String>,
    pub js: Option<String>,
    /// Isolated environment storage; `None` shares the default environment.
    pub isolation_path: Option<String>,
}

impl Default for PanePolicy {
    fn default() -> Self {
        Self {
            navigation: NavigationFilter::allow_all(),
            block_popups: false,
            context_menus: true,
            zoom: 1.0,
            css: None,
            js: None,
            isolation_path: None,
        }
    }
}

impl PanePolicy {
    /// Policy for ad-hoc workspace panes: popups blocked, context menus off,
    /// shared environment.
    pub fn workspace_default() -> Self {
        Self {
            block_popups: true,
            context_menus: false,
            ..Self::default()
        }
    }

    pub fn from_workspace_config(config: &WorkspaceConfig) -> Self {
        Self {
            block_popups: config.block_popups,
            context_menus: !config.disable_context_menu,
            isolation_path: config.isolation_path.clone(),
            ..Self::default()
        }
    }

    /// Policy for a dashboard pane. Sections left out of the config keep the
    /// engine defaults.
    pub fn from_pane_config(config: &PaneConfig) -> Self {
        let navigation = config
            .navigation
            .as_ref()
            .map(|nav| NavigationFilter::from_mode(&nav.mode, &nav.hosts))
            .unwrap_or_default();
        let ui = config.ui.clone().unwrap_or_default();
        let injection = config.injection.clone().unwrap_or_default();

        Self {
            navigation,
            block_popups: ui.block_popups,
            context_menus: !ui.disable_context_menu,
            zoom: config.zoom,
            css: injection.css,
            js: injection.js,
            isolation_path: config.user_data_folder.clone(),
        }
    }

    /// Zoom factor to apply. Non-positive or non-finite values mean 1.0.
    pub fn effective_zoom(&self) -> f64 {
        if self.zoom.is_finite() && self.zoom > 0.0 {
            self.zoom
        } else {
            1.0
        }
    }

    /// Scripts to run on every document creation, CSS first.
    pub fn document_scripts(&self) -> Vec<String> {
        let mut scripts = Vec::new();
        if let Some(css) = self.css.as_deref().filter(|c| !c.trim().is_empty()) {
            scripts.push(css_injection_script(css));
        }
        if let Some(js) = self.js.as_deref().filter(|j| !j.trim().is_empty()) {
            scripts.push(js.to_string());
        }
        scripts
    }

    pub fn resource_key(&self) -> ResourceKey {
        ResourceKey::from_isolation(self.isolation_path.as_deref())
    }
}
