use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure to create a rendering environment.
///
/// Cloneable because a single failed creation is observed by every pane
/// waiting on the same resource key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvironmentError {
    #[error("environment creation failed for '{key}': {reason}")]
    CreationFailed { key: String, reason: String },

    #[error("environment task for '{key}' was dropped before completing")]
    Abandoned { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface is not attached to an environment")]
    Detached,

    #[error("surface has been disposed")]
    Disposed,

    #[error("surface backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PaneboardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
