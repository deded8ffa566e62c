//! Unit tests for the in-memory revocation store.

use std::time::Duration;

use crate::errors::StoreError;
use crate::repositories::revocation::{InMemoryRevocationStore, RevocationStore};

#[tokio::test]
async fn test_put_then_get() {
    let store = InMemoryRevocationStore::new();

    store
        .put("raw-token", "42", Duration::from_secs(60))
        .await
        .unwrap();

    // Visible immediately after the put completes
    let value = store.get("raw-token").await.unwrap();
    assert_eq!(value, Some("42".to_string()));
}

#[tokio::test]
async fn test_get_absent_key() {
    let store = InMemoryRevocationStore::new();

    assert_eq!(store.get("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_entry_expires_after_ttl() {
    let store = InMemoryRevocationStore::new();

    store
        .put("short-lived", "7", Duration::from_millis(20))
        .await
        .unwrap();
    assert!(store.get("short-lived").await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(40)).await;

    assert_eq!(store.get("short-lived").await.unwrap(), None);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_zero_ttl_never_observable() {
    let store = InMemoryRevocationStore::new();

    store.put("dead", "1", Duration::ZERO).await.unwrap();

    assert_eq!(store.get("dead").await.unwrap(), None);
    assert!(store.remaining_ttl("dead").await.is_none());
}

#[tokio::test]
async fn test_put_overwrites_and_resets_ttl() {
    let store = InMemoryRevocationStore::new();

    store.put("k", "old", Duration::from_secs(5)).await.unwrap();
    store.put("k", "new", Duration::from_secs(300)).await.unwrap();

    assert_eq!(store.get("k").await.unwrap(), Some("new".to_string()));
    let ttl = store.remaining_ttl("k").await.unwrap();
    assert!(ttl > chrono::Duration::seconds(200));
}

#[tokio::test]
async fn test_delete() {
    let store = InMemoryRevocationStore::new();

    store.put("k", "v", Duration::from_secs(60)).await.unwrap();

    assert!(store.delete("k").await.unwrap());
    assert_eq!(store.get("k").await.unwrap(), None);
    assert!(!store.delete("k").await.unwrap());
}

#[tokio::test]
async fn test_unavailable_store_fails_every_operation() {
    let store = InMemoryRevocationStore::new();
    store.set_unavailable(true);

    assert!(matches!(
        store.get("k").await,
        Err(StoreError::Unavailable { .. })
    ));
    assert!(matches!(
        store.put("k", "v", Duration::from_secs(1)).await,
        Err(StoreError::Unavailable { .. })
    ));
    assert!(matches!(
        store.delete("k").await,
        Err(StoreError::Unavailable { .. })
    ));

    // Recovers once the outage clears
    store.set_unavailable(false);
    assert_eq!(store.get("k").await.unwrap(), None);
}
