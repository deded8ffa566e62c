//! Token service: issuance, per-request validation, and logout revocation.
//!
//! A single access token moves through `ISSUED -> VALID* -> EXPIRED |
//! REVOKED`. Expiry is derived from the token itself; revocation is derived
//! from a TTL-bounded entry in the external store, keyed by the raw token
//! string. Both terminal states are absorbing: there is no un-revoke.

use std::time::Duration;

use chrono::Utc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::domain::entities::token::{TokenKind, TokenPair};
use crate::domain::entities::Principal;
use crate::errors::{AuthError, TokenError};
use crate::repositories::revocation::RevocationStore;
use crate::services::auth::AuthResolver;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Service orchestrating the token lifecycle over a revocation store
pub struct TokenService<S: RevocationStore> {
    store: S,
    codec: TokenCodec,
    config: TokenServiceConfig,
}

impl<S: RevocationStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// Signing keys are derived from the configuration once, here, and the
    /// configuration is immutable afterwards.
    pub fn new(store: S, config: TokenServiceConfig) -> Self {
        let codec = TokenCodec::new(&config);
        Self {
            store,
            codec,
            config,
        }
    }

    /// Issues a new access token for a user
    ///
    /// Pure issuance: no store write happens here.
    pub fn issue_access_token(&self, user_id: i64) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(self.config.access_token_expiry_secs);
        self.codec
            .encode(user_id, TokenKind::Access, now, expires_at)
    }

    /// Issues a new refresh token for a user
    ///
    /// Signed with the refresh secret; no store write happens here.
    pub fn issue_refresh_token(&self, user_id: i64) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(self.config.refresh_token_expiry_secs);
        self.codec
            .encode(user_id, TokenKind::Refresh, now, expires_at)
    }

    /// Issues an access/refresh token pair, as minted at login
    pub fn issue_token_pair(&self, user_id: i64) -> Result<TokenPair, TokenError> {
        let access_token = self.issue_access_token(user_id)?;
        let refresh_token = self.issue_refresh_token(user_id)?;

        debug!(user_id, "issued token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_secs,
            self.config.refresh_token_expiry_secs,
        ))
    }

    /// Validates a raw access token and returns the user id it was issued to
    ///
    /// Malformed and expired tokens are rejected from the token alone,
    /// before any store round trip. Otherwise the revocation store is
    /// consulted once: a live entry whose value matches the token's own user
    /// id means this exact token was logged out and is now being replayed.
    ///
    /// # Returns
    /// * `Ok(user_id)` - Token accepted
    /// * `Err(TokenError::Malformed)` - Structurally invalid or wrong secret
    /// * `Err(TokenError::Expired)` - Past natural expiry
    /// * `Err(TokenError::PossibleHijack)` - Reuse of a logged-out token
    /// * `Err(TokenError::StoreUnavailable)` - Revocation check incomplete
    pub async fn validate(&self, raw: &str) -> Result<i64, TokenError> {
        let claims = self.codec.decode(raw, TokenKind::Access)?;

        let entry = self.store_get(raw).await?;
        match entry {
            None => Ok(claims.user_id),
            Some(value) if value == claims.user_id.to_string() => {
                warn!(user_id = claims.user_id, "rejected reuse of logged-out access token");
                Err(TokenError::PossibleHijack)
            }
            // An entry recorded under a different user id does not bind this
            // token
            Some(_) => Ok(claims.user_id),
        }
    }

    /// Revokes an access token at logout
    ///
    /// Writes a revocation entry keyed by the raw token string, with a TTL
    /// equal to the token's remaining lifetime, then clears the user's
    /// refresh-token marker. The blacklist write must succeed for the logout
    /// to count; the marker deletion is best effort.
    pub async fn logout(&self, user_id: i64, raw: &str) -> Result<(), TokenError> {
        let claims = self
            .codec
            .decode_ignoring_expiry(raw, TokenKind::Access)?;

        let remaining = claims.remaining_lifetime().to_std().unwrap_or(Duration::ZERO);
        if remaining.is_zero() {
            // Already past expiry; a blacklist entry would be dead on arrival
            debug!(user_id, "logout of expired access token, skipping blacklist write");
        } else {
            self.store_put(raw, &user_id.to_string(), remaining).await?;
        }

        // Refresh-side revocation: clear the marker keyed by the user id.
        // Failure here must not block the logout.
        match timeout(
            self.config.store_timeout(),
            self.store.delete(&user_id.to_string()),
        )
        .await
        {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => warn!(user_id, error = %e, "failed to clear refresh token marker"),
            Err(_) => warn!(user_id, "timed out clearing refresh token marker"),
        }

        info!(user_id, "access token revoked");
        Ok(())
    }

    /// Validates a raw access token and resolves the authenticated principal
    pub async fn authenticate<R>(&self, raw: &str, resolver: &R) -> Result<Principal, AuthError>
    where
        R: AuthResolver + ?Sized,
    {
        let user_id = self.validate(raw).await?;
        resolver.resolve(user_id).await
    }

    async fn store_get(&self, key: &str) -> Result<Option<String>, TokenError> {
        match timeout(self.config.store_timeout(), self.store.get(key)).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!(error = %e, "revocation lookup failed");
                Err(TokenError::StoreUnavailable)
            }
            Err(_) => {
                warn!("revocation lookup timed out");
                Err(TokenError::StoreUnavailable)
            }
        }
    }

    async fn store_put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), TokenError> {
        match timeout(self.config.store_timeout(), self.store.put(key, value, ttl)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                warn!(error = %e, "revocation write failed");
                Err(TokenError::StoreUnavailable)
            }
            Err(_) => {
                warn!("revocation write timed out");
                Err(TokenError::StoreUnavailable)
            }
        }
    }
}
