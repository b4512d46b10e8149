pub mod errors;
pub mod types;

pub use errors::{ConfigError, EnvironmentError, PaneboardError, SurfaceError};
pub use types::{PaneId, Rect};

pub type Result<T> = std::result::Result<T, PaneboardError>;
