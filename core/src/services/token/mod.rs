//! Token service module for signed access/refresh token management
//!
//! This module handles the token lifecycle:
//! - Access and refresh token issuance with independent signing secrets
//! - Per-request validation against the revocation store
//! - Logout-time revocation with TTL bounded by the token's remaining life

mod codec;
mod config;
mod service;


pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use service::TokenService;
