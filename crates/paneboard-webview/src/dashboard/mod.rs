//! Template dashboards.
//!
//! A [`Dashboard`] opens the panes listed in a [`DashboardConfig`] and lays
//! them out with one layout template, in configuration order. Panes beyond
//! the template's cell count are ignored. Closing a pane reflows the rest.


use std::sync::Arc;

use paneboard_common::{PaneId, Rect};
use paneboard_config::{DashboardConfig, PaneConfig};
use paneboard_tiling::{compute_layout, LayoutTemplate, SlotSet};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::backend::{EnvironmentFactory, PaneHost, SurfaceBackend};
use crate::environment::EnvironmentCache;
use crate::events::WorkspaceEvent;
use crate::policy::{normalize_address, PanePolicy};
use crate::workspace::pane::Pane;
use crate::workspace::{
    apply_crash, apply_ready, EnvironmentReady, Initializer, PaneError, PaneState,
};

pub struct Dashboard<B, F>
where
    B: SurfaceBackend,
    F: EnvironmentFactory,
{
    backend: B,
    cache: Arc<EnvironmentCache<F>>,
    template: LayoutTemplate,
    gap: i32,
    width: i32,
    height: i32,
    panes: Vec<Pane<B::Host>>,
    initializer: Initializer<F::Environment>,
    events: Vec<WorkspaceEvent>,
}

impl<B, F> Dashboard<B, F>
where
    B: SurfaceBackend,
    B::Host: PaneHost<Environment = F::Environment>,
    F: EnvironmentFactory,
{
    /// Open every configured pane that fits the template.
    ///
    /// A pane whose container cannot be created is skipped. A pane without a
    /// usable address is still hosted but never navigated.
    pub fn open(
        config: &DashboardConfig,
        backend: B,
        cache: Arc<EnvironmentCache<F>>,
        size: (i32, i32),
        runtime: Handle,
    ) -> Self {
        let template = LayoutTemplate::from_ids(&config.layout.id, &config.layout.orientation);
        let mut dashboard = Self {
            backend,
            cache,
            template,
            gap: config.app.gap_px.max(0),
            width: size.0,
            height: size.1,
            panes: Vec::new(),
            initializer: Initializer::new(runtime),
            events: Vec::new(),
        };

        let capacity = template.cell_count();
        if config.panes.len() > capacity {
            warn!(
                configured = config.panes.len(),
                capacity,
                layout = %config.layout.id,
                "dashboard has more panes than the layout holds; extra panes ignored"
            );
        }

        for (index, pane_config) in config.panes.iter().take(capacity).enumerate() {
            dashboard.open_pane(PaneId(index as u32 + 1), pane_config);
        }

        info!(
            layout = ?template,
            panes = dashboard.panes.len(),
            "dashboard opened"
        );
        dashboard.apply_layout();
        dashboard
    }

    fn open_pane(&mut self, pane_id: PaneId, config: &PaneConfig) {
        let title = if config.id.trim().is_empty() {
            config.url.trim()
        } else {
            config.id.trim()
        };

        let address = match normalize_address(&config.url) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(pane_id = %pane_id, error = %e, "dashboard pane has no usable address");
                None
            }
        };

        let host = match self.backend.create_host(pane_id, title) {
            Ok(host) => host,
            Err(e) => {
                warn!(pane_id = %pane_id, error = %e, "dashboard pane container creation failed");
                return;
            }
        };

        let policy = PanePolicy::from_pane_config(config);
        let key = policy.resource_key();
        let generation = self.initializer.next_generation();
        debug!(pane_id = %pane_id, key = %key, "dashboard pane created");

        self.panes.push(Pane::new(
            pane_id,
            generation,
            title.to_string(),
            address,
            SlotSet::empty(),
            policy,
            host,
        ));
        self.events.push(WorkspaceEvent::PaneAdmitted {
            pane_id,
            title: title.to_string(),
            slots: None,
        });

        let environment = self.cache.get_environment(&key);
        self.initializer
            .request(environment, key, pane_id, generation);
    }

    /// Lay the open panes out in configuration order.
    pub fn apply_layout(&mut self) -> Vec<(PaneId, Rect)> {
        let rects = compute_layout(
            self.template,
            self.width,
            self.height,
            self.gap,
            self.panes.len(),
        );

        let mut placed = Vec::with_capacity(rects.len());
        for (pane, bounds) in self.panes.iter_mut().zip(rects) {
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

    pub fn resize(&mut self, width: i32, height: i32) -> Vec<(PaneId, Rect)> {
        self.width = width;
        self.height = height;
        self.apply_layout()
    }

    /// Close a pane and reflow the remaining ones into the template.
    pub fn close(&mut self, pane_id: PaneId) -> bool {
        let Some(index) = self.panes.iter().position(|p| p.id == pane_id) else {
            return false;
        };

        let mut pane = self.panes.remove(index);
        pane.close();
        info!(pane_id = %pane_id, "dashboard pane closed");
        self.events.push(WorkspaceEvent::PaneClosed { pane_id });
        self.apply_layout();
        true
    }

    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Some(ready) = self.initializer.try_next() {
            self.finish(ready);
            processed += 1;
        }
        processed
    }

    pub async fn settle(&mut self) {
        while let Some(ready) = self.initializer.next().await {
            self.finish(ready);
        }
    }

    fn finish(&mut self, ready: EnvironmentReady<F::Environment>) {
        let pane = self.panes.iter_mut().find(|p| p.id == ready.pane_id);
        if let Err(e) = apply_ready(pane, ready, &mut self.events) {
            warn!(pane_id = %e.pane_id(), error = %e, "dashboard pane failed to activate");
        }
    }

    pub fn handle_renderer_crash(&mut self, pane_id: PaneId) -> Result<(), PaneError> {
        let pane = self.panes.iter_mut().find(|p| p.id == pane_id);
        apply_crash(pane, &mut self.events)
    }

    pub fn template(&self) -> LayoutTemplate {
        self.template
    }

    /// Open panes in layout order.
    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.panes.iter().map(|p| p.id).collect()
    }

    pub fn pane_state(&self, pane_id: PaneId) -> Option<PaneState> {
        self.pane(pane_id).map(|p| p.state)
    }

    pub fn pane_bounds(&self, pane_id: PaneId) -> Option<Rect> {
        self.pane(pane_id).and_then(|p| p.bounds)
    }

    pub fn pane_title(&self, pane_id: PaneId) -> Option<&str> {
        self.pane(pane_id).map(|p| p.title.as_str())
    }

    pub fn drain_events(&mut self) -> Vec<WorkspaceEvent> {
        std::mem::take(&mut self.events)
    }

    fn pane(&self, pane_id: PaneId) -> Option<&Pane<B::Host>> {
        self.panes.iter().find(|p| p.id == pane_id)
    }
}
