//! A rendering backend with no window.
//!
//! Environments are profile directories (created on demand for isolated
//! keys); hosts record their state and log every call. Used by the CLI to
//! exercise the workspace and dashboards without a browser engine.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use paneboard_common::{EnvironmentError, PaneId, Rect, SurfaceError};
use paneboard_webview::{
    EnvironmentFactory, NavigationFilter, PaneHost, PanePolicy, ResourceKey, SurfaceBackend,
};
use tracing::{debug, info};
use url::Url;

#[derive(Debug)]
pub struct HeadlessEnvironment {
    pub key: String,
    pub profile: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct HeadlessFactory;

#[async_trait]
impl EnvironmentFactory for HeadlessFactory {
    type Environment = HeadlessEnvironment;

    async fn create_environment(
        &self,
        key: &ResourceKey,
    ) -> Result<HeadlessEnvironment, EnvironmentError> {
        let profile = match key.isolation_path() {
            Some(path) => {
                tokio::fs::create_dir_all(path).await.map_err(|e| {
                    EnvironmentError::CreationFailed {
                        key: key.to_string(),
                        reason: format!("cannot create profile {}: {e}", path.display()),
                    }
                })?;
                Some(path.to_path_buf())
            }
            None => None,
        };

        info!(key = %key, "headless environment created");
        Ok(HeadlessEnvironment {
            key: key.to_string(),
            profile,
        })
    }
}

#[derive(Debug, Default)]
pub struct HeadlessBackend;

impl SurfaceBackend for HeadlessBackend {
    type Host = HeadlessHost;

    fn create_host(&mut self, pane_id: PaneId, title: &str) -> Result<HeadlessHost, SurfaceError> {
        debug!(pane_id = %pane_id, title, "headless host created");
        Ok(HeadlessHost {
            pane_id,
            environment: None,
            url: None,
            navigation: NavigationFilter::allow_all(),
            bounds: None,
            scripts: 0,
            disposed: false,
        })
    }
}

#[derive(Debug)]
pub struct HeadlessHost {
    pane_id: PaneId,
    environment: Option<Arc<HeadlessEnvironment>>,
    url: Option<Url>,
    navigation: NavigationFilter,
    bounds: Option<Rect>,
    scripts: usize,
    disposed: bool,
}

impl HeadlessHost {
    fn live(&self) -> Result<(), SurfaceError> {
        if self.disposed {
            Err(SurfaceError::Disposed)
        } else {
            Ok(())
        }
    }

    fn attached(&self) -> Result<(), SurfaceError> {
        self.live()?;
        if self.environment.is_none() {
            return Err(SurfaceError::Detached);
        }
        Ok(())
    }
}

impl PaneHost for HeadlessHost {
    type Environment = HeadlessEnvironment;

    fn attach(&mut self, environment: Arc<HeadlessEnvironment>) -> Result<(), SurfaceError> {
        self.live()?;
        debug!(
            pane_id = %self.pane_id,
            key = %environment.key,
            profile = ?environment.profile,
            "attached"
        );
        self.environment = Some(environment);
        Ok(())
    }

    fn apply_policy(&mut self, policy: &PanePolicy) -> Result<(), SurfaceError> {
        self.attached()?;
        self.scripts = policy.document_scripts().len();
        self.navigation = policy.navigation.clone();
        debug!(
            pane_id = %self.pane_id,
            scripts = self.scripts,
            zoom = policy.effective_zoom(),
            popups_blocked = policy.block_popups,
            context_menus = policy.context_menus,
            whitelist = policy.navigation.is_whitelist(),
            "policy applied"
        );
        Ok(())
    }

    fn navigate(&mut self, url: &Url) -> Result<(), SurfaceError> {
        self.attached()?;
        if !self.navigation.allows(url.as_str()) {
            debug!(pane_id = %self.pane_id, url = %url, "navigation blocked");
            return Err(SurfaceError::Backend(format!(
                "navigation to {url} is not whitelisted"
            )));
        }
        debug!(pane_id = %self.pane_id, url = %url, "navigate");
        self.url = Some(url.clone());
        Ok(())
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.attached()?;
        debug!(pane_id = %self.pane_id, url = ?self.url.as_ref().map(Url::as_str), "reload");
        Ok(())
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    fn show_unavailable(&mut self, reason: &str) {
        debug!(pane_id = %self.pane_id, reason, "showing unavailable state");
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.environment = None;
        debug!(pane_id = %self.pane_id, last_bounds = ?self.bounds, "disposed");
    }
}
