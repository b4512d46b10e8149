//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod dashboard;
mod workspace;

pub use dashboard::*;
pub use workspace::*;

use serde::{Deserialize, Serialize};

/// Root of the workspace settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneboardConfig {
    pub workspace: WorkspaceConfig,
    pub logging: LoggingConfig,
}
