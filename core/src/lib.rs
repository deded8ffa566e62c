//! # LifeLog Core
//!
//! Core domain layer for the LifeLog backend. This crate contains the
//! authentication/session subsystem: signed access and refresh token
//! issuance, per-request validation, and logout-time revocation backed by
//! an external key/value store with per-key TTL.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Principal, TokenKind, TokenPair};
pub use errors::{AuthError, DecodeError, StoreError, TokenError};
pub use repositories::revocation::{InMemoryRevocationStore, RevocationStore};
pub use services::auth::AuthResolver;
pub use services::token::{TokenCodec, TokenService, TokenServiceConfig};
