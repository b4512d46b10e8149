//! Admitting and removing panes.

use paneboard_common::PaneId;
use paneboard_tiling::SizeClass;
use tracing::{debug, info, warn};

use super::pane::Pane;
use super::types::AdmissionError;
use super::Workspace;
use crate::backend::{EnvironmentFactory, PaneHost, SurfaceBackend};
use crate::events::WorkspaceEvent;
use crate::policy::{addresses_match, normalize_address, PanePolicy};

impl<B, F> Workspace<B, F>
where
    B: SurfaceBackend,
    B::Host: PaneHost<Environment = F::Environment>,
    F: EnvironmentFactory,
{
    /// Admit a pane with the workspace's default policy.
    pub fn admit(
        &mut self,
        size: SizeClass,
        title: &str,
        address: &str,
    ) -> Result<PaneId, AdmissionError> {
        let policy = self.default_policy.clone();
        self.admit_with_policy(size, title, address, policy)
    }

    /// Admit a pane.
    ///
    /// The address is normalized before anything is reserved. On success the
    /// pane exists in the Pending state with its slots committed and its
    /// container positioned; the environment is acquired in the background.
    pub fn admit_with_policy(
        &mut self,
        size: SizeClass,
        title: &str,
        address: &str,
        policy: PanePolicy,
    ) -> Result<PaneId, AdmissionError> {
        let url = normalize_address(address)?;

        let Some(slots) = self.allocator.reserve(size) else {
            debug!(%size, occupied = %self.allocator.occupied(), "admission refused");
            return Err(AdmissionError::Refused(size));
        };

        let pane_id = PaneId(self.next_pane_id);
        self.next_pane_id += 1;

        let host = match self.backend.create_host(pane_id, title) {
            Ok(host) => host,
            Err(e) => {
                self.allocator.release(slots);
                warn!(pane_id = %pane_id, error = %e, "pane container creation failed");
                return Err(AdmissionError::Host(e));
            }
        };

        let key = policy.resource_key();
        let generation = self.initializer.next_generation();
        info!(
            pane_id = %pane_id,
            %size,
            %slots,
            url = %url,
            key = %key,
            "pane admitted"
        );

        self.panes.insert(
            pane_id,
            Pane::new(
                pane_id,
                generation,
                title.to_string(),
                Some(url),
                slots,
                policy,
                host,
            ),
        );
        self.events.push(WorkspaceEvent::PaneAdmitted {
            pane_id,
            title: title.to_string(),
            slots: Some(slots),
        });
        self.apply_layout();

        let environment = self.cache.get_environment(&key);
        self.initializer
            .request(environment, key, pane_id, generation);

        Ok(pane_id)
    }

    /// Boolean admission entry point for the presentation layer.
    pub fn request_admission(&mut self, size: SizeClass, title: &str, address: &str) -> bool {
        match self.admit(size, title, address) {
            Ok(_) => true,
            Err(AdmissionError::Refused(_)) => false,
            Err(e) => {
                warn!(address, error = %e, "admission rejected");
                false
            }
        }
    }

    /// Remove a pane: dispose its container, free its slots and re-layout
    /// the rest. Returns false if the pane is unknown or already removed.
    pub fn remove(&mut self, pane_id: PaneId) -> bool {
        let Some(mut pane) = self.panes.remove(&pane_id) else {
            debug!(pane_id = %pane_id, "remove ignored: unknown pane");
            return false;
        };

        pane.close();
        self.allocator.release(pane.slots);
        info!(pane_id = %pane_id, slots = %pane.slots, "pane removed");
        self.events.push(WorkspaceEvent::PaneClosed { pane_id });
        self.apply_layout();
        true
    }

    /// Whether a live pane already shows `address` (after normalization,
    /// ignoring case). Unparseable input is never hosted.
    pub fn is_address_hosted(&self, address: &str) -> bool {
        let Ok(url) = normalize_address(address) else {
            return false;
        };
        self.panes.values().any(|p| {
            p.is_live()
                && p
                    .address
                    .as_ref()
                    .is_some_and(|hosted| addresses_match(hosted, &url))
        })
    }
}
