//! Redis-backed cache layer
//!
//! Provides the Redis client used by the revocation store, with bounded
//! retry for transient connection errors.

pub mod redis_client;
pub mod revocation_store;

pub use redis_client::RedisClient;
pub use revocation_store::RedisRevocationStore;

// Re-export commonly used types
pub use ll_shared::config::cache::CacheConfig;
