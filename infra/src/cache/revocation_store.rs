//! Redis-backed implementation of the revocation store.
//!
//! Redis gives the contract the core needs for free: SETEX entries are
//! visible immediately after the write completes and disappear on their own
//! once the TTL elapses, across process restarts and across horizontally
//! scaled instances.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use ll_core::errors::StoreError;
use ll_core::repositories::revocation::RevocationStore;

use super::redis_client::RedisClient;

/// Key namespace for revocation entries
const KEY_PREFIX: &str = "auth:revoked:";

/// Revocation store backed by Redis
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn namespaced(key: &str) -> String {
        format!("{}{}", KEY_PREFIX, key)
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.client
            .get(&Self::namespaced(key))
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))
    }

    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        // SETEX rejects a zero expiry, and a dead-on-arrival entry must never
        // be observable anyway. Sub-second TTLs round up; over-retention by a
        // bounded margin is acceptable, early eviction is not.
        let ttl_seconds = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
        if ttl_seconds == 0 {
            debug!("skipping revocation write with non-positive TTL");
            return Ok(());
        }

        self.client
            .set_with_expiry(&Self::namespaced(key), value, ttl_seconds)
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.client
            .delete(&Self::namespaced(key))
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))
    }
}
