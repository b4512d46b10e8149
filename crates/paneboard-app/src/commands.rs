//! Subcommand implementations. Each returns the JSON report to print.

use std::path::Path;
use std::sync::Arc;

use paneboard_common::{PaneId, PaneboardError, Rect};
use paneboard_tiling::{compute_layout, Availability, LayoutTemplate, SlotSet};
use paneboard_webview::{
    Dashboard, EnvironmentCache, PaneState, Workspace, WorkspaceEvent, WorkspaceOptions,
};
use serde::Serialize;
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::cli::PaneRequest;
use crate::headless::{HeadlessBackend, HeadlessFactory};

fn to_json<T: Serialize>(report: &T) -> Result<String, PaneboardError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| PaneboardError::Other(format!("failed to serialize report: {e}")))
}

#[derive(Debug, Serialize)]
struct LayoutReport {
    template: LayoutTemplate,
    width: i32,
    height: i32,
    gap: i32,
    rects: Vec<Rect>,
}

pub fn layout(
    template: &str,
    orientation: &str,
    size: (i32, i32),
    gap: i32,
    panes: usize,
) -> Result<String, PaneboardError> {
    let template = LayoutTemplate::from_ids(template, orientation);
    let rects = compute_layout(template, size.0, size.1, gap, panes);
    to_json(&LayoutReport {
        template,
        width: size.0,
        height: size.1,
        gap: gap.max(0),
        rects,
    })
}

#[derive(Debug, Serialize)]
struct AdmissionOutcome {
    request: String,
    pane_id: Option<PaneId>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct PaneSummary {
    pane_id: PaneId,
    title: String,
    state: Option<PaneState>,
    slots: Option<SlotSet>,
    bounds: Option<Rect>,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    admissions: Vec<AdmissionOutcome>,
    panes: Vec<PaneSummary>,
    availability: Availability,
    occupied: SlotSet,
    events: Vec<WorkspaceEvent>,
}

/// Admit `requests` in order, let environments settle, then apply crash and
/// close reports. Addresses already hosted are skipped.
pub async fn simulate(
    requests: &[PaneRequest],
    crashes: &[u32],
    closes: &[u32],
    options: WorkspaceOptions,
    runtime: Handle,
) -> Result<String, PaneboardError> {
    let cache = Arc::new(EnvironmentCache::new(HeadlessFactory));
    let mut workspace = Workspace::new(HeadlessBackend, cache, options, runtime);

    let mut admissions = Vec::with_capacity(requests.len());
    for request in requests {
        let label = format!("{}={}", request.size, request.address);
        let outcome = if workspace.is_address_hosted(&request.address) {
            AdmissionOutcome {
                request: label,
                pane_id: None,
                error: Some("address already hosted".into()),
            }
        } else {
            match workspace.admit(request.size, &request.address, &request.address) {
                Ok(pane_id) => AdmissionOutcome {
                    request: label,
                    pane_id: Some(pane_id),
                    error: None,
                },
                Err(e) => AdmissionOutcome {
                    request: label,
                    pane_id: None,
                    error: Some(e.to_string()),
                },
            }
        };
        admissions.push(outcome);
    }

    workspace.settle().await;

    for &n in crashes {
        if let Err(e) = workspace.handle_renderer_crash(PaneId(n)) {
            warn!(error = %e, "crash recovery failed");
        }
    }
    for &n in closes {
        if !workspace.remove(PaneId(n)) {
            warn!(pane = n, "close ignored: no such pane");
        }
    }

    let panes = workspace
        .pane_ids()
        .into_iter()
        .map(|id| PaneSummary {
            pane_id: id,
            title: workspace.pane_title(id).unwrap_or_default().to_string(),
            state: workspace.pane_state(id),
            slots: workspace.pane_slots(id),
            bounds: workspace.pane_bounds(id),
        })
        .collect();

    info!(panes = workspace.pane_count(), "simulation finished");
    to_json(&SimulationReport {
        admissions,
        panes,
        availability: workspace.availability(),
        occupied: workspace.occupied_slots(),
        events: workspace.drain_events(),
    })
}

#[derive(Debug, Serialize)]
struct DashboardReport {
    template: LayoutTemplate,
    panes: Vec<PaneSummary>,
    events: Vec<WorkspaceEvent>,
}

/// Open a dashboard file headlessly and report its settled layout.
pub async fn dashboard(
    path: &Path,
    size: (i32, i32),
    runtime: Handle,
) -> Result<String, PaneboardError> {
    let config = paneboard_config::load_dashboard(path)?;
    let cache = Arc::new(EnvironmentCache::new(HeadlessFactory));
    let mut dashboard = Dashboard::open(&config, HeadlessBackend, cache, size, runtime);
    dashboard.settle().await;

    let panes = dashboard
        .pane_ids()
        .into_iter()
        .map(|id| PaneSummary {
            pane_id: id,
            title: dashboard.pane_title(id).unwrap_or_default().to_string(),
            state: dashboard.pane_state(id),
            slots: None,
            bounds: dashboard.pane_bounds(id),
        })
        .collect();

    to_json(&DashboardReport {
        template: dashboard.template(),
        panes,
        events: dashboard.drain_events(),
    })
}
