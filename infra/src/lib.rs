//! # LifeLog Infrastructure Layer
//!
//! Concrete implementations of the external collaborators the core consumes.
//! Currently this is the Redis-backed revocation store used for logout-time
//! token blacklisting.

/// Cache module - Redis client and the revocation store implementation
pub mod cache;

/// Configuration loading for infrastructure services
pub mod config {
    use ll_shared::config::{auth::JwtConfig, cache::CacheConfig};

    /// Infrastructure configuration settings
    #[derive(Debug, Clone)]
    pub struct InfrastructureConfig {
        /// JWT secrets and token lifetimes
        pub jwt: JwtConfig,
        /// Redis configuration for the revocation store
        pub cache: CacheConfig,
    }

    /// Load configuration from the environment, reading `.env` if present
    pub fn load() -> InfrastructureConfig {
        dotenvy::dotenv().ok();

        InfrastructureConfig {
            jwt: JwtConfig::from_env(),
            cache: CacheConfig::from_env(),
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
