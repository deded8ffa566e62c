//! Authentication configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
///
/// Access and refresh tokens are signed with two independent secrets so that
/// a refresh token can never be replayed as an access token.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret for signing access tokens
    pub access_secret: String,

    /// Secret for signing refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,

    /// Timeout in milliseconds for revocation store round trips
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("access-secret-change-in-production"),
            refresh_secret: String::from("refresh-secret-change-in-production"),
            access_token_expiry: 3600,      // 1 hour
            refresh_token_expiry: 1_209_600, // 14 days
            store_timeout_ms: default_store_timeout_ms(),
        }
    }
}

impl JwtConfig {
    /// Create a configuration from environment variables, falling back to
    /// development defaults for anything unset
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("JWT_ACCESS_SECRET")
                .unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("JWT_REFRESH_SECRET")
                .unwrap_or(defaults.refresh_secret),
            access_token_expiry: env_i64("JWT_ACCESS_TOKEN_SECONDS", defaults.access_token_expiry),
            refresh_token_expiry: env_i64(
                "JWT_REFRESH_TOKEN_SECONDS",
                defaults.refresh_token_expiry,
            ),
            store_timeout_ms: env_i64("JWT_STORE_TIMEOUT_MS", default_store_timeout_ms() as i64)
                .max(0) as u64,
        }
    }

    /// Check whether development secrets are still in place
    pub fn is_using_default_secrets(&self) -> bool {
        let defaults = Self::default();
        self.access_secret == defaults.access_secret
            || self.refresh_secret == defaults.refresh_secret
    }
}

fn default_store_timeout_ms() -> u64 {
    2000
}

fn env_i64(name: &str, fallback: i64) -> i64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}
