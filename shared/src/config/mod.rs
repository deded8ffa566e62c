//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT secrets and token lifetime configuration
//! - `cache` - Redis configuration for the token revocation store

pub mod auth;
pub mod cache;

pub use auth::JwtConfig;
pub use cache::CacheConfig;
