use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use futures_util::future::{BoxFuture, FutureExt, Shared};
use paneboard_common::EnvironmentError;
use tracing::{debug, info, warn};

use super::key::ResourceKey;
use crate::backend::EnvironmentFactory;

/// A memoized environment creation. Clones poll the same underlying task.
pub type EnvironmentFuture<E> = Shared<BoxFuture<'static, Result<Arc<E>, EnvironmentError>>>;

/// Process-wide map from resource key to environment creation.
///
/// Constructed explicitly and shared behind an `Arc` by the workspace and any
/// dashboards. A failed creation stays failed: later requests for the key get
/// the same error.
pub struct EnvironmentCache<F: EnvironmentFactory> {
    factory: Arc<F>,
    entries: Mutex<HashMap<ResourceKey, EnvironmentFuture<F::Environment>>>,
}

impl<F: EnvironmentFactory> EnvironmentCache<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory: Arc::new(factory),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The environment for `key`, creating it on first request.
    ///
    /// The entry is inserted before this returns, so concurrent callers for
    /// one key always share a single creation.
    pub fn get_environment(&self, key: &ResourceKey) -> EnvironmentFuture<F::Environment> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = entries.get(key) {
            debug!(key = %key, "environment cache hit");
            return existing.clone();
        }

        let factory = Arc::clone(&self.factory);
        let owned_key = key.clone();
        let creation = async move {
            debug!(key = %owned_key, "creating environment");
            match factory.create_environment(&owned_key).await {
                Ok(environment) => {
                    info!(key = %owned_key, "environment ready");
                    Ok(Arc::new(environment))
                }
                Err(e) => {
                    warn!(key = %owned_key, error = %e, "environment creation failed");
                    Err(e)
                }
            }
        }
        .boxed()
        .shared();

        entries.insert(key.clone(), creation.clone());
        creation
    }

    /// Number of keys ever requested.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }
}
