use paneboard_common::{EnvironmentError, PaneId, SurfaceError};
use paneboard_config::WorkspaceConfig;
use paneboard_tiling::SizeClass;
use serde::Serialize;

use crate::policy::{AddressError, PanePolicy};

/// Lifecycle state of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneState {
    /// Slots and container exist; the environment is still being acquired.
    Pending,
    Active,
    /// Showing its unavailable state. Slots stay reserved until removal.
    Failed,
    Closed,
}

/// Why an admission was not accepted. No slots stay reserved on any of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdmissionError {
    #[error("no room for a {0} pane")]
    Refused(SizeClass),

    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    #[error("failed to create pane container: {0}")]
    Host(#[source] SurfaceError),
}

/// Failure at one of a pane's asynchronous boundaries. The pane is left in
/// the Failed state; the rest of the workspace is unaffected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaneError {
    #[error("{pane_id}: environment unavailable: {source}")]
    Environment {
        pane_id: PaneId,
        source: EnvironmentError,
    },

    #[error("{pane_id}: surface error: {source}")]
    Surface { pane_id: PaneId, source: SurfaceError },

    #[error("{pane_id}: renderer crashed and reload failed: {source}")]
    RendererCrashed { pane_id: PaneId, source: SurfaceError },
}

impl PaneError {
    pub fn pane_id(&self) -> PaneId {
        match self {
            PaneError::Environment { pane_id, .. }
            | PaneError::Surface { pane_id, .. }
            | PaneError::RendererCrashed { pane_id, .. } => *pane_id,
        }
    }
}

/// Construction parameters for a [`Workspace`](super::Workspace).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceOptions {
    pub gap: i32,
    pub width: i32,
    pub height: i32,
    /// Policy for panes admitted without one of their own.
    pub policy: PanePolicy,
}

impl Default for WorkspaceOptions {
    fn default() -> Self {
        Self {
            gap: 6,
            width: 1280,
            height: 720,
            policy: PanePolicy::workspace_default(),
        }
    }
}

impl WorkspaceOptions {
    pub fn from_config(config: &WorkspaceConfig) -> Self {
        Self {
            gap: config.gap_px,
            width: config.width,
            height: config.height,
            policy: PanePolicy::from_workspace_config(config),
        }
    }
}
