use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Key under which panes without an isolation path share an environment.
pub const SHARED_KEY: &str = "__shared__";

/// Identity of a browsing environment.
///
/// Keys compare case-insensitively. The original spelling of an isolation
/// path is kept for the factory.
#[derive(Debug, Clone)]
pub struct ResourceKey {
    normalized: String,
    path: Option<PathBuf>,
}

impl ResourceKey {
    pub fn shared() -> Self {
        Self {
            normalized: SHARED_KEY.to_string(),
            path: None,
        }
    }

    /// Key for an optional isolation path. Absent or blank paths map to the
    /// shared environment.
    pub fn from_isolation(path: Option<&str>) -> Self {
        match path.map(str::trim) {
            Some(p) if !p.is_empty() => Self {
                normalized: p.to_lowercase(),
                path: Some(PathBuf::from(p)),
            },
            _ => Self::shared(),
        }
    }

    pub fn is_shared(&self) -> bool {
        self.path.is_none()
    }

    /// Storage location for an isolated environment, `None` when shared.
    pub fn isolation_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl Default for ResourceKey {
    fn default() -> Self {
        Self::shared()
    }
}

impl PartialEq for ResourceKey {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for ResourceKey {}

impl Hash for ResourceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}
