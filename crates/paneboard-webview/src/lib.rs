//! Browser-pane hosting for Paneboard.
//!
//! Owns everything between "the user asked for a pane" and "a browsing
//! surface is showing that address": environment sharing, per-pane policy,
//! the slot-based workspace and template dashboards. Rendering itself sits
//! behind the traits in [`backend`], so any engine (or a headless recorder)
//! can be plugged in.

pub mod backend;
pub mod dashboard;
pub mod environment;
pub mod events;
pub mod policy;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{EnvironmentFactory, PaneHost, SurfaceBackend};
pub use dashboard::Dashboard;
pub use environment::{EnvironmentCache, EnvironmentFuture, ResourceKey};
pub use events::WorkspaceEvent;
pub use policy::{
    addresses_match, normalize_address, AddressError, NavigationFilter, PanePolicy,
};
pub use workspace::{AdmissionError, PaneError, PaneState, Workspace, WorkspaceOptions};
