//! Configuration validation.
//!
//! Each validator pushes human-readable messages into a shared list; the
//! entry points join them into a single `ConfigError::ValidationError`.

mod dashboard;
mod helpers;
mod workspace;


use paneboard_common::ConfigError;

use crate::schema::{DashboardConfig, PaneboardConfig};

/// Run all validations on the workspace config, collecting all errors.
pub fn validate(config: &PaneboardConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    workspace::validate_workspace(&mut errors, config);
    workspace::validate_logging(&mut errors, config);

    finish(errors)
}

/// Run all validations on a dashboard document, collecting all errors.
pub fn validate_dashboard(config: &DashboardConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    dashboard::validate_app(&mut errors, config);
    dashboard::validate_layout(&mut errors, config);
    dashboard::validate_panes(&mut errors, config);

    finish(errors)
}

fn finish(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
