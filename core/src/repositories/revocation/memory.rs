//! In-memory implementation of the revocation store.
//!
//! Serves as the test double for the token service and as a single-process
//! fallback when no Redis instance is configured. Expired entries are pruned
//! lazily on access.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::errors::StoreError;

use super::r#trait::RevocationStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// In-memory revocation store with per-key TTL
#[derive(Clone, Default)]
pub struct InMemoryRevocationStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a store outage: while set, every operation fails
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Remaining TTL of a live entry, if one exists
    pub async fn remaining_ttl(&self, key: &str) -> Option<chrono::Duration> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.expires_at - Utc::now())
    }

    /// Number of live entries
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|entry| !entry.is_expired()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::unavailable("simulated outage"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_available()?;

        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        self.check_available()?;

        let mut entries = self.entries.write().await;
        if ttl.is_zero() {
            // Dead on arrival; must never be observable
            entries.remove(key);
            return Ok(());
        }

        let expires_at = Utc::now()
            + chrono::Duration::milliseconds(ttl.as_millis().min(i64::MAX as u128) as i64);
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.check_available()?;

        let mut entries = self.entries.write().await;
        match entries.remove(key) {
            Some(entry) => Ok(!entry.is_expired()),
            None => Ok(false),
        }
    }
}
