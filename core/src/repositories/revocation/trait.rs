//! Revocation store trait defining the key/value contract consumed by the
//! token service.

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::StoreError;

/// Key/value store with per-key time-to-live, used to record logged-out
/// access tokens
///
/// The store is the single point of shared mutable state in the token
/// subsystem; revocation is data, not in-process state, so tokens stay
/// revoked across process restarts and across horizontally-scaled instances.
///
/// # Contract
/// - An entry is visible to `get` immediately after `put` completes for the
///   same key (no read-your-own-write anomaly).
/// - An entry becomes unconditionally absent once its TTL elapses. Bounded
///   over-retention is acceptable; early eviction is not.
/// - A `put` with a non-positive TTL must never leave an observable entry.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Look up the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Entry present and not yet expired
    /// * `Ok(None)` - No live entry for this key
    /// * `Err(StoreError)` - The lookup could not be completed
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key` for at most `ttl`
    ///
    /// Overwrites any existing entry for the key, resetting its TTL.
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Remove the entry under `key`
    ///
    /// # Returns
    /// * `Ok(true)` - An entry was removed
    /// * `Ok(false)` - No entry existed
    /// * `Err(StoreError)` - The removal could not be completed
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;
}
