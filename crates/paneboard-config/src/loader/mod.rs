//! Config file loading and creation.

mod dashboard;
mod loader;
mod paths;
mod template;


pub use dashboard::{load_dashboard, parse_dashboard_json, parse_dashboard_toml};
pub use loader::{load_default, load_from_path};
pub use paths::{create_default_config, default_config_path};
