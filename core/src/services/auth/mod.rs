//! Authentication collaborators consumed by the token subsystem.

use async_trait::async_trait;

use crate::domain::entities::Principal;
use crate::errors::AuthError;

/// Resolves a validated user identifier into an authenticated principal
///
/// Implementations live with the user store; the token service only supplies
/// the integer identifier extracted from an accepted token.
#[async_trait]
pub trait AuthResolver: Send + Sync {
    /// Load the user behind `user_id` together with its authorities
    ///
    /// # Returns
    /// * `Ok(Principal)` - User found, authorities resolved
    /// * `Err(AuthError::UserNotFound)` - No user behind the identifier
    async fn resolve(&self, user_id: i64) -> Result<Principal, AuthError>;
}
