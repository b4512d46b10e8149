//! The slot-based workspace.
//!
//! [`Workspace`] admits panes into the fixed 2×2 slot grid, acquires their
//! environments in the background and keeps every container positioned at
//! the union of its slots' cells. It is driven by a single owner (`&mut
//! self`); environment completions are applied by [`Workspace::pump`] or
//! [`Workspace::settle`].

mod admission;
mod layout;
mod lifecycle;
pub(crate) mod pane;
mod types;


pub(crate) use lifecycle::{apply_crash, apply_ready, EnvironmentReady, Initializer};
pub use types::{AdmissionError, PaneError, PaneState, WorkspaceOptions};

use std::collections::BTreeMap;
use std::sync::Arc;

use paneboard_common::{PaneId, Rect};
use paneboard_tiling::{Availability, LayoutEngine, LayoutTemplate, SlotAllocator, SlotSet};
use tokio::runtime::Handle;
use tracing::warn;

use crate::backend::{EnvironmentFactory, PaneHost, SurfaceBackend};
use crate::environment::EnvironmentCache;
use crate::events::WorkspaceEvent;
use crate::policy::PanePolicy;
use pane::Pane;

pub struct Workspace<B, F>
where
    B: SurfaceBackend,
    F: EnvironmentFactory,
{
    backend: B,
    cache: Arc<EnvironmentCache<F>>,
    allocator: SlotAllocator,
    engine: LayoutEngine,
    width: i32,
    height: i32,
    default_policy: PanePolicy,
    panes: BTreeMap<PaneId, Pane<B::Host>>,
    next_pane_id: u32,
    initializer: Initializer<F::Environment>,
    events: Vec<WorkspaceEvent>,
}

impl<B, F> Workspace<B, F>
where
    B: SurfaceBackend,
    B::Host: PaneHost<Environment = F::Environment>,
    F: EnvironmentFactory,
{
    /// Create an empty workspace. Environment acquisition is spawned on
    /// `runtime`.
    pub fn new(
        backend: B,
        cache: Arc<EnvironmentCache<F>>,
        options: WorkspaceOptions,
        runtime: Handle,
    ) -> Self {
        Self {
            backend,
            cache,
            allocator: SlotAllocator::new(),
            engine: LayoutEngine::new(LayoutTemplate::Quad, options.gap.max(0)),
            width: options.width,
            height: options.height,
            default_policy: options.policy,
            panes: BTreeMap::new(),
            next_pane_id: 1,
            initializer: Initializer::new(runtime),
            events: Vec::new(),
        }
    }

    /// Apply every environment completion that has already arrived.
    /// Returns how many were processed.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Some(ready) = self.initializer.try_next() {
            let pane = self.panes.get_mut(&ready.pane_id);
            if let Err(e) = apply_ready(pane, ready, &mut self.events) {
                warn!(pane_id = %e.pane_id(), error = %e, "pane failed to activate");
            }
            processed += 1;
        }
        processed
    }

    /// Wait until no environment acquisition is in flight, applying each
    /// completion as it arrives.
    pub async fn settle(&mut self) {
        while let Some(ready) = self.initializer.next().await {
            let pane = self.panes.get_mut(&ready.pane_id);
            if let Err(e) = apply_ready(pane, ready, &mut self.events) {
                warn!(pane_id = %e.pane_id(), error = %e, "pane failed to activate");
            }
        }
    }

    /// React to the engine reporting a renderer crash for `pane_id`.
    ///
    /// An Active pane gets exactly one reload. Crashes for unknown or
    /// inactive panes are ignored.
    pub fn handle_renderer_crash(&mut self, pane_id: PaneId) -> Result<(), PaneError> {
        apply_crash(self.panes.get_mut(&pane_id), &mut self.events)
    }

    pub fn availability(&self) -> Availability {
        self.allocator.availability()
    }

    pub fn occupied_slots(&self) -> SlotSet {
        self.allocator.occupied()
    }

    /// Union of the slots held by live panes.
    pub fn live_slots(&self) -> SlotSet {
        self.panes
            .values()
            .filter(|p| p.is_live())
            .fold(SlotSet::empty(), |acc, p| acc.union(p.slots))
    }

    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.panes.keys().copied().collect()
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn pane_state(&self, pane_id: PaneId) -> Option<PaneState> {
        self.panes.get(&pane_id).map(|p| p.state)
    }

    pub fn pane_slots(&self, pane_id: PaneId) -> Option<SlotSet> {
        self.panes.get(&pane_id).map(|p| p.slots)
    }

    pub fn pane_bounds(&self, pane_id: PaneId) -> Option<Rect> {
        self.panes.get(&pane_id).and_then(|p| p.bounds)
    }

    pub fn pane_title(&self, pane_id: PaneId) -> Option<&str> {
        self.panes.get(&pane_id).map(|p| p.title.as_str())
    }

    /// Number of environment acquisitions not yet applied.
    pub fn pending_acquisitions(&self) -> usize {
        self.initializer.in_flight()
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn cache(&self) -> &Arc<EnvironmentCache<F>> {
        &self.cache
    }

    /// Take all events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<WorkspaceEvent> {
        std::mem::take(&mut self.events)
    }
}
