//! Configuration for the token service

use std::time::Duration;

use ll_shared::config::auth::JwtConfig;

/// Configuration for the token service
///
/// Constructed once at startup and passed in explicitly; secrets and
/// lifetimes never change for the life of the process.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing and verifying access tokens
    pub access_secret: String,
    /// Secret for signing and verifying refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_secs: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry_secs: i64,
    /// Bound on each revocation store round trip, in milliseconds
    pub store_timeout_ms: u64,
}

impl TokenServiceConfig {
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_token_expiry_secs: config.access_token_expiry,
            refresh_token_expiry_secs: config.refresh_token_expiry,
            store_timeout_ms: config.store_timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_jwt_config() {
        let jwt = JwtConfig {
            access_secret: "a".to_string(),
            refresh_secret: "b".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
            store_timeout_ms: 500,
        };

        let config = TokenServiceConfig::from(&jwt);

        assert_eq!(config.access_secret, "a");
        assert_eq!(config.refresh_secret, "b");
        assert_eq!(config.access_token_expiry_secs, 3600);
        assert_eq!(config.refresh_token_expiry_secs, 86400);
        assert_eq!(config.store_timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_default_uses_distinct_secrets() {
        let config = TokenServiceConfig::default();
        assert_ne!(config.access_secret, config.refresh_secret);
    }
}
