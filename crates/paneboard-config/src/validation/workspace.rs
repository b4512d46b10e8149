//! Workspace and logging validation.

use crate::schema::PaneboardConfig;

use super::helpers::{validate_one_of, validate_range};

pub(crate) const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_workspace(errors: &mut Vec<String>, config: &PaneboardConfig) {
    let ws = &config.workspace;
    validate_range(errors, "workspace.gap_px", ws.gap_px, 0, 64);
    validate_range(errors, "workspace.width", ws.width, 1, 16384);
    validate_range(errors, "workspace.height", ws.height, 1, 16384);

    if ws
        .isolation_path
        .as_deref()
        .is_some_and(|p| p.trim().is_empty())
    {
        errors.push("workspace.isolation_path is set but empty".into());
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &PaneboardConfig) {
    validate_one_of(errors, "logging.level", &config.logging.level, LOG_LEVELS);
}
