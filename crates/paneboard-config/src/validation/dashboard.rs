//! Dashboard document validation.

use std::collections::HashSet;

use crate::schema::DashboardConfig;

use super::helpers::{validate_one_of, validate_range, validate_range_f64};

const LAYOUT_IDS: &[&str] = &["QUAD", "HALF", "MIX_3"];
const ORIENTATIONS: &[&str] = &["horizontal", "vertical"];
const NAVIGATION_MODES: &[&str] = &["allow", "whitelist"];

pub(crate) fn validate_app(errors: &mut Vec<String>, config: &DashboardConfig) {
    validate_range(errors, "app.gap_px", config.app.gap_px, 0, 64);
}

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &DashboardConfig) {
    validate_one_of(errors, "layout.id", &config.layout.id, LAYOUT_IDS);
    validate_one_of(
        errors,
        "layout.orientation",
        &config.layout.orientation,
        ORIENTATIONS,
    );
}

pub(crate) fn validate_panes(errors: &mut Vec<String>, config: &DashboardConfig) {
    let mut seen = HashSet::new();

    for (i, pane) in config.panes.iter().enumerate() {
        let prefix = format!("panes[{i}]");

        if pane.url.trim().is_empty() {
            errors.push(format!("{prefix}.url is empty"));
        }
        if !pane.id.is_empty() && !seen.insert(pane.id.to_ascii_lowercase()) {
            errors.push(format!("{prefix}.id \"{}\" is duplicated", pane.id));
        }
        validate_range_f64(errors, &format!("{prefix}.zoom"), pane.zoom, 0.0, 5.0);

        if let Some(nav) = &pane.navigation {
            validate_one_of(
                errors,
                &format!("{prefix}.navigation.mode"),
                &nav.mode,
                NAVIGATION_MODES,
            );
            if nav.mode.trim().eq_ignore_ascii_case("whitelist")
                && nav.hosts.iter().all(|h| h.trim().is_empty())
            {
                errors.push(format!(
                    "{prefix}.navigation.hosts is empty; whitelist will allow all navigation"
                ));
            }
        }
    }
}
