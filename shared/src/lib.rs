//! Shared configuration types for the LifeLog server
//!
//! This crate holds configuration structures used across the server layers:
//! - `config::auth` - JWT signing secrets and token lifetimes
//! - `config::cache` - Redis connection settings for the revocation store

pub mod config;

// Re-export commonly used items at crate root
pub use config::{CacheConfig, JwtConfig};
