//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a signed token, carried as the JWT header `typ` tag
///
/// Access and refresh tokens live in separate trust domains: each kind is
/// signed and verified with its own secret, so a token of one kind can never
/// pass validation as the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Wire tag written into the JWT header
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }

    /// Parse a header tag back into a kind
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "access" => Some(TokenKind::Access),
            "refresh" => Some(TokenKind::Refresh),
            _ => None,
        }
    }
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier the token was issued to
    pub user_id: i64,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims with explicit timestamps
    ///
    /// Timestamps are supplied by the caller rather than read from a clock
    /// so that encoding is deterministic.
    pub fn new(user_id: i64, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Checks whether the claims have passed their natural expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Time remaining until expiry, or zero if already expired
    pub fn remaining_lifetime(&self) -> Duration {
        Duration::seconds((self.exp - Utc::now().timestamp()).max(0))
    }
}

/// Token pair returned to the client after login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with the configured lifetimes
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_tags() {
        assert_eq!(TokenKind::Access.tag(), "access");
        assert_eq!(TokenKind::Refresh.tag(), "refresh");
        assert_eq!(TokenKind::from_tag("access"), Some(TokenKind::Access));
        assert_eq!(TokenKind::from_tag("refresh"), Some(TokenKind::Refresh));
        assert_eq!(TokenKind::from_tag("jwt"), None);
    }

    #[test]
    fn test_claims_timestamps() {
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::hours(1);
        let claims = Claims::new(42, issued_at, expires_at);

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp, expires_at.timestamp());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let issued_at = Utc::now() - Duration::hours(2);
        let expires_at = issued_at + Duration::hours(1);
        let claims = Claims::new(42, issued_at, expires_at);

        assert!(claims.is_expired());
        assert_eq!(claims.remaining_lifetime(), Duration::zero());
    }

    #[test]
    fn test_claims_remaining_lifetime() {
        let now = Utc::now();
        let claims = Claims::new(7, now, now + Duration::minutes(30));

        let remaining = claims.remaining_lifetime();
        assert!(remaining > Duration::minutes(29));
        assert!(remaining <= Duration::minutes(30));
    }

    #[test]
    fn test_claims_serialization() {
        let now = Utc::now();
        let claims = Claims::new(99, now, now + Duration::hours(1));

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_token_pair_creation() {
        let pair = TokenPair::new(
            "access_jwt".to_string(),
            "refresh_jwt".to_string(),
            3600,
            1_209_600,
        );

        assert_eq!(pair.access_token, "access_jwt");
        assert_eq!(pair.refresh_token, "refresh_jwt");
        assert_eq!(pair.access_expires_in, 3600);
        assert_eq!(pair.refresh_expires_in, 1_209_600);
    }
}
