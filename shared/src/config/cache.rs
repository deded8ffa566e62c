//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis cache configuration for the token revocation store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub pool_size: u32,

    /// Default TTL for cache entries in seconds
    #[serde(default = "default_ttl")]
    pub default_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            pool_size: 10,
            default_ttl: default_ttl(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let pool_size = std::env::var("REDIS_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let default_ttl = std::env::var("REDIS_DEFAULT_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_ttl);

        Self {
            url,
            pool_size,
            default_ttl,
        }
    }
}

fn default_ttl() -> u64 {
    3600
}
