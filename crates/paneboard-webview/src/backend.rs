//! Seams to the rendering engine.
//!
//! The workspace never talks to a browser engine directly. A
//! [`SurfaceBackend`] creates one [`PaneHost`] container per pane
//! synchronously; an [`EnvironmentFactory`] creates the (expensive, shared)
//! browsing environments asynchronously.

use std::sync::Arc;

use async_trait::async_trait;
use paneboard_common::{EnvironmentError, PaneId, Rect, SurfaceError};
use url::Url;

use crate::environment::ResourceKey;
use crate::policy::PanePolicy;

/// Creates browsing environments (profile directory, browser process, ...).
///
/// Called at most once per [`ResourceKey`] by the
/// [`EnvironmentCache`](crate::EnvironmentCache).
#[async_trait]
pub trait EnvironmentFactory: Send + Sync + 'static {
    type Environment: Send + Sync + 'static;

    async fn create_environment(
        &self,
        key: &ResourceKey,
    ) -> Result<Self::Environment, EnvironmentError>;
}

/// Creates pane containers on the presentation side.
pub trait SurfaceBackend {
    type Host: PaneHost;

    /// Create an empty, unattached container for a pane.
    fn create_host(&mut self, pane_id: PaneId, title: &str) -> Result<Self::Host, SurfaceError>;
}

/// One pane's browsing surface.
///
/// Methods are only called from the workspace owner. `dispose` is called at
/// most once and nothing is called after it.
pub trait PaneHost {
    type Environment;

    /// Bind the surface to a ready environment.
    fn attach(&mut self, environment: Arc<Self::Environment>) -> Result<(), SurfaceError>;

    /// Install scripts, popup and context-menu handling, zoom and the
    /// navigation filter. Called once, after `attach` and before `navigate`.
    fn apply_policy(&mut self, policy: &PanePolicy) -> Result<(), SurfaceError>;

    fn navigate(&mut self, url: &Url) -> Result<(), SurfaceError>;

    /// Reload the current document in place after a renderer crash.
    fn reload(&mut self) -> Result<(), SurfaceError>;

    fn set_bounds(&mut self, bounds: Rect);

    /// Switch the container to its "unavailable" presentation.
    fn show_unavailable(&mut self, reason: &str);

    fn dispose(&mut self);
}
