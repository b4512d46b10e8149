//! Environment acquisition for pending panes.
//!
//! Acquisition runs on the tokio runtime; results come back to the owner
//! over a channel and are applied only when the owner pumps them. Nothing is
//! cancelled: a result for a pane that is gone, or whose generation no longer
//! matches, is dropped.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use paneboard_common::{EnvironmentError, PaneId};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::pane::Pane;
use super::types::{PaneError, PaneState};
use crate::backend::PaneHost;
use crate::environment::{EnvironmentFuture, ResourceKey};
use crate::events::WorkspaceEvent;

pub(crate) struct EnvironmentReady<E> {
    pub(crate) pane_id: PaneId,
    pub(crate) generation: u64,
    pub(crate) result: Result<Arc<E>, EnvironmentError>,
}

pub(crate) struct Initializer<E> {
    runtime: Handle,
    tx: mpsc::UnboundedSender<EnvironmentReady<E>>,
    rx: mpsc::UnboundedReceiver<EnvironmentReady<E>>,
    in_flight: usize,
    next_generation: u64,
}

impl<E: Send + Sync + 'static> Initializer<E> {
    pub(crate) fn new(runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            tx,
            rx,
            in_flight: 0,
            next_generation: 1,
        }
    }

    /// A fresh stamp for a newly created pane.
    pub(crate) fn next_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }

    /// Await `environment` in the background and report it for `pane_id`.
    ///
    /// Exactly one completion is reported per request, even when the runtime
    /// drops the task before it finishes.
    pub(crate) fn request(
        &mut self,
        environment: EnvironmentFuture<E>,
        key: ResourceKey,
        pane_id: PaneId,
        generation: u64,
    ) {
        let report = CompletionReport {
            tx: self.tx.clone(),
            pane_id,
            generation,
            key,
            sent: false,
        };
        self.in_flight += 1;
        self.runtime.spawn(async move {
            // Panics in the factory are reported as an abandoned environment.
            match AssertUnwindSafe(environment).catch_unwind().await {
                Ok(result) => report.send(result),
                Err(_) => report.abandon(),
            }
        });
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(crate) fn try_next(&mut self) -> Option<EnvironmentReady<E>> {
        let ready = self.rx.try_recv().ok()?;
        self.in_flight -= 1;
        Some(ready)
    }

    /// Wait for the next completion, or `None` when nothing is in flight.
    /// Every request reports exactly once, so this never waits on a task the
    /// runtime has already dropped.
    pub(crate) async fn next(&mut self) -> Option<EnvironmentReady<E>> {
        if self.in_flight == 0 {
            return None;
        }
        let ready = self.rx.recv().await?;
        self.in_flight -= 1;
        Some(ready)
    }
}

/// Sends the completion for one request. Dropping it unsent reports the
/// environment as abandoned.
struct CompletionReport<E> {
    tx: mpsc::UnboundedSender<EnvironmentReady<E>>,
    pane_id: PaneId,
    generation: u64,
    key: ResourceKey,
    sent: bool,
}

impl<E> CompletionReport<E> {
    fn send(mut self, result: Result<Arc<E>, EnvironmentError>) {
        self.deliver(result);
    }

    fn abandon(mut self) {
        let key = self.key.to_string();
        self.deliver(Err(EnvironmentError::Abandoned { key }));
    }

    fn deliver(&mut self, result: Result<Arc<E>, EnvironmentError>) {
        self.sent = true;
        let _ = self.tx.send(EnvironmentReady {
            pane_id: self.pane_id,
            generation: self.generation,
            result,
        });
    }
}

impl<E> Drop for CompletionReport<E> {
    fn drop(&mut self) {
        if !self.sent {
            warn!(pane_id = %self.pane_id, key = %self.key, "environment task dropped");
            let key = self.key.to_string();
            self.deliver(Err(EnvironmentError::Abandoned { key }));
        }
    }
}

/// Apply an environment completion to its pane, if the pane still wants it.
pub(crate) fn apply_ready<H: PaneHost>(
    pane: Option<&mut Pane<H>>,
    ready: EnvironmentReady<H::Environment>,
    events: &mut Vec<WorkspaceEvent>,
) -> Result<(), PaneError> {
    let pane_id = ready.pane_id;
    let Some(pane) = pane else {
        debug!(pane_id = %pane_id, "discarding environment for removed pane");
        return Ok(());
    };
    if pane.generation != ready.generation || pane.state != PaneState::Pending {
        debug!(
            pane_id = %pane_id,
            generation = ready.generation,
            current = pane.generation,
            "discarding stale environment completion"
        );
        return Ok(());
    }

    let outcome = ready
        .result
        .map_err(|source| PaneError::Environment { pane_id, source })
        .and_then(|environment| pane.activate(environment));

    match outcome {
        Ok(()) => {
            let url = pane.address.as_ref().map(|u| u.to_string());
            info!(pane_id = %pane_id, url = url.as_deref().unwrap_or("-"), "pane active");
            events.push(WorkspaceEvent::PaneActivated { pane_id, url });
            Ok(())
        }
        Err(e) => {
            pane.fail(&e.to_string());
            events.push(WorkspaceEvent::PaneFailed {
                pane_id,
                reason: e.to_string(),
            });
            Err(e)
        }
    }
}

/// Answer a renderer crash for `pane`.
pub(crate) fn apply_crash<H: PaneHost>(
    pane: Option<&mut Pane<H>>,
    events: &mut Vec<WorkspaceEvent>,
) -> Result<(), PaneError> {
    let Some(pane) = pane else {
        return Ok(());
    };

    match pane.recover_from_crash() {
        Ok(true) => {
            info!(pane_id = %pane.id, "renderer crashed; pane reloaded");
            events.push(WorkspaceEvent::PaneRecovered { pane_id: pane.id });
            Ok(())
        }
        Ok(false) => {
            debug!(pane_id = %pane.id, state = ?pane.state, "ignoring crash report for inactive pane");
            Ok(())
        }
        Err(e) => {
            warn!(pane_id = %pane.id, error = %e, "pane reload failed");
            events.push(WorkspaceEvent::PaneFailed {
                pane_id: pane.id,
                reason: e.to_string(),
            });
            Err(e)
        }
    }
}
