//! Workspace event types.

use paneboard_common::{PaneId, Rect};
use paneboard_tiling::SlotSet;
use serde::Serialize;

/// Events emitted by a workspace or dashboard, drained by the host loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WorkspaceEvent {
    /// A pane was accepted; its environment is still being acquired.
    /// Dashboard panes occupy a template cell and carry no slots.
    PaneAdmitted {
        pane_id: PaneId,
        title: String,
        slots: Option<SlotSet>,
    },
    /// The pane's container was moved or resized.
    BoundsChanged { pane_id: PaneId, bounds: Rect },
    /// Environment attached, policy applied and navigation started.
    PaneActivated { pane_id: PaneId, url: Option<String> },
    /// The pane is showing its unavailable state.
    PaneFailed { pane_id: PaneId, reason: String },
    /// A renderer crash was answered with a successful reload.
    PaneRecovered { pane_id: PaneId },
    PaneClosed { pane_id: PaneId },
}

impl WorkspaceEvent {
    pub fn pane_id(&self) -> PaneId {
        match self {
            WorkspaceEvent::PaneAdmitted { pane_id, .. }
            | WorkspaceEvent::BoundsChanged { pane_id, .. }
            | WorkspaceEvent::PaneActivated { pane_id, .. }
            | WorkspaceEvent::PaneFailed { pane_id, .. }
            | WorkspaceEvent::PaneRecovered { pane_id }
            | WorkspaceEvent::PaneClosed { pane_id } => *pane_id,
        }
    }
}
