//! Shared browsing environments.
//!
//! Creating an environment is expensive, so panes that use the same
//! isolation path share one. [`EnvironmentCache`] memoizes the creation
//! future per [`ResourceKey`]; every caller awaits the same outcome.

mod cache;
mod key;

#[cfg(test)]
mod tests;

pub use cache::{EnvironmentCache, EnvironmentFuture};
pub use key::{ResourceKey, SHARED_KEY};
