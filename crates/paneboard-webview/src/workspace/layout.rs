//! Positioning pane containers.

use paneboard_common::{PaneId, Rect};
use tracing::debug;

use super::Workspace;
use crate::backend::{EnvironmentFactory, PaneHost, SurfaceBackend};
use crate::events::WorkspaceEvent;

impl<B, F> Workspace<B, F>
where
    B: SurfaceBackend,
    B::Host: PaneHost<Environment = F::Environment>,
    F: EnvironmentFactory,
{
    /// Change the container size and re-layout.
    pub fn resize(&mut self, width: i32, height: i32) -> Vec<(PaneId, Rect)> {
        self.width = width;
        self.height = height;
        self.apply_layout()
    }

    /// Position every pane at the union of its slots' Quad cells.
    ///
    /// Returns the bounds of every placed pane. With a zero-area container
    /// nothing is moved.
    pub fn apply_layout(&mut self) -> Vec<(PaneId, Rect)> {
        let cells = self.engine.slot_rects(self.width, self.height);
        if cells.is_empty() {
            debug!(width = self.width, height = self.height, "layout skipped: empty container");
            return Vec::new();
        }

        let mut placed = Vec::with_capacity(self.panes.len());
        for pane in self.panes.values_mut() {
            let Some(bounds) = pane
                .slots
                .iter()
                .filter_map(|slot| cells.get(slot).copied())
                .reduce(|a, b| a.union(&b))
            else {
                continue;
            };

            if pane.set_bounds(bounds) {
                self.events.push(WorkspaceEvent::BoundsChanged {
                    pane_id: pane.id,
                    bounds,
                });
            }
            placed.push((pane.id, bounds));
        }
        placed
    }
}
