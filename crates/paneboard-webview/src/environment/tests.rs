//! Tests for resource keys and the environment cache.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::*;
use crate::testing::MockFactory;

// -- Keys --

#[test]
fn blank_paths_share_the_default_key() {
    assert_eq!(ResourceKey::from_isolation(None), ResourceKey::shared());
    assert_eq!(ResourceKey::from_isolation(Some("   ")), ResourceKey::shared());
    assert!(ResourceKey::shared().is_shared());
    assert_eq!(ResourceKey::shared().as_str(), SHARED_KEY);
}

#[test]
fn keys_compare_case_insensitively() {
    let a = ResourceKey::from_isolation(Some("/Profiles/Work"));
    let b = ResourceKey::from_isolation(Some(" /profiles/WORK "));
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "/profiles/work");
    // Original spelling is what the factory sees
    assert_eq!(
        a.isolation_path().map(|p| p.to_string_lossy().into_owned()),
        Some("/Profiles/Work".to_string())
    );
    assert!(!a.is_shared());
}

// -- Cache --

#[tokio::test]
async fn concurrent_requests_share_one_creation() {
    let factory = MockFactory::new();
    let created = factory.counter();
    let cache = EnvironmentCache::new(factory);
    let key = ResourceKey::shared();

    let first = cache.get_environment(&key);
    let second = cache.get_environment(&key);
    let (a, b) = tokio::join!(first, second);

    let (a, b) = (a.unwrap(), b.unwrap());
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(created.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn later_requests_reuse_completed_environment() {
    let factory = MockFactory::new();
    let created = factory.counter();
    let cache = EnvironmentCache::new(factory);

    let a = cache
        .get_environment(&ResourceKey::from_isolation(Some("/p/One")))
        .await
        .unwrap();
    let b = cache
        .get_environment(&ResourceKey::from_isolation(Some("/P/ONE")))
        .await
        .unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(created.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn distinct_keys_get_distinct_environments() {
    let factory = MockFactory::new();
    let created = factory.counter();
    let cache = EnvironmentCache::new(factory);

    let shared = cache.get_environment(&ResourceKey::shared()).await.unwrap();
    let isolated = cache
        .get_environment(&ResourceKey::from_isolation(Some("/p/two")))
        .await
        .unwrap();
    assert!(!Arc::ptr_eq(&shared, &isolated));
    assert_eq!(isolated.key, "/p/two");
    assert_eq!((shared.serial, isolated.serial), (0, 1));
    assert_eq!(created.load(Ordering::SeqCst), 2);
    assert!(cache.contains(&ResourceKey::shared()));
}

#[tokio::test]
async fn failure_is_shared_and_never_retried() {
    let factory = MockFactory::new().failing("/broken");
    let created = factory.counter();
    let cache = EnvironmentCache::new(factory);
    let key = ResourceKey::from_isolation(Some("/broken"));

    let first = cache.get_environment(&key).await.unwrap_err();
    let second = cache.get_environment(&key).await.unwrap_err();
    assert_eq!(first, second);
    assert_eq!(created.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn entry_exists_before_creation_completes() {
    let (factory, gate) = MockFactory::new().gated();
    let created = factory.counter();
    let cache = Arc::new(EnvironmentCache::new(factory));
    let key = ResourceKey::shared();

    let pending = tokio::spawn(cache.get_environment(&key));
    tokio::task::yield_now().await;
    assert!(cache.contains(&key));

    // A second caller while the first is still waiting
    let late = cache.get_environment(&key);
    gate.send(true).unwrap();

    let a = pending.await.unwrap().unwrap();
    let b = late.await.unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(created.load(Ordering::SeqCst), 1);
}
