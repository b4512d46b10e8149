//! A single hosted pane and its state transitions.

use std::sync::Arc;

use paneboard_common::{PaneId, Rect, SurfaceError};
use paneboard_tiling::SlotSet;
use url::Url;

use super::types::{PaneError, PaneState};
use crate::backend::PaneHost;
use crate::policy::PanePolicy;

pub(crate) struct Pane<H> {
    pub(crate) id: PaneId,
    /// Stamp checked against environment completions.
    pub(crate) generation: u64,
    pub(crate) title: String,
    /// `None` when a dashboard entry had no usable address; such a pane is
    /// still hosted but never navigated.
    pub(crate) address: Option<Url>,
    /// Empty for dashboard panes, which occupy a template cell instead.
    pub(crate) slots: SlotSet,
    pub(crate) state: PaneState,
    pub(crate) policy: PanePolicy,
    pub(crate) bounds: Option<Rect>,
    host: Option<H>,
}

impl<H: PaneHost> Pane<H> {
    pub(crate) fn new(
        id: PaneId,
        generation: u64,
        title: String,
        address: Option<Url>,
        slots: SlotSet,
        policy: PanePolicy,
        host: H,
    ) -> Self {
        Self {
            id,
            generation,
            title,
            address,
            slots,
            state: PaneState::Pending,
            policy,
            bounds: None,
            host: Some(host),
        }
    }

    pub(crate) fn is_live(&self) -> bool {
        self.state != PaneState::Closed
    }

    /// Attach the environment, apply policy and navigate.
    pub(crate) fn activate(&mut self, environment: Arc<H::Environment>) -> Result<(), PaneError> {
        let pane_id = self.id;
        let surface = |source| PaneError::Surface { pane_id, source };
        let host = self.host.as_mut().ok_or(surface(SurfaceError::Disposed))?;

        host.attach(environment).map_err(surface)?;
        host.apply_policy(&self.policy).map_err(surface)?;
        if let Some(url) = &self.address {
            host.navigate(url).map_err(surface)?;
        }

        self.state = PaneState::Active;
        Ok(())
    }

    pub(crate) fn fail(&mut self, reason: &str) {
        self.state = PaneState::Failed;
        if let Some(host) = self.host.as_mut() {
            host.show_unavailable(reason);
        }
    }

    /// Answer a renderer crash with one in-place reload.
    ///
    /// Returns `Ok(false)` when the pane is not Active, which makes the crash
    /// a no-op. A failed reload leaves the pane Failed.
    pub(crate) fn recover_from_crash(&mut self) -> Result<bool, PaneError> {
        if self.state != PaneState::Active {
            return Ok(false);
        }
        let Some(host) = self.host.as_mut() else {
            return Ok(false);
        };

        match host.reload() {
            Ok(()) => Ok(true),
            Err(source) => {
                let err = PaneError::RendererCrashed {
                    pane_id: self.id,
                    source,
                };
                self.fail(&err.to_string());
                Err(err)
            }
        }
    }

    /// Move the container. Returns false when the bounds did not change.
    pub(crate) fn set_bounds(&mut self, bounds: Rect) -> bool {
        if self.bounds == Some(bounds) {
            return false;
        }
        self.bounds = Some(bounds);
        if let Some(host) = self.host.as_mut() {
            host.set_bounds(bounds);
        }
        true
    }

    /// Dispose the container. Only the first call reaches the host.
    pub(crate) fn close(&mut self) -> bool {
        self.state = PaneState::Closed;
        match self.host.take() {
            Some(mut host) => {
                host.dispose();
                true
            }
            None => false,
        }
    }
}
