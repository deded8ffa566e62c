//! Authenticated principal produced after successful validation.

use serde::{Deserialize, Serialize};

/// An authenticated user with resolved authorities
///
/// Produced by an [`AuthResolver`](crate::services::auth::AuthResolver)
/// implementation once a token has been accepted; consumed by downstream
/// business logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// User identifier taken from the validated token
    pub user_id: i64,

    /// Username loaded by the resolver
    pub username: String,

    /// Granted authorities
    pub authorities: Vec<String>,
}

impl Principal {
    pub fn new(user_id: i64, username: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            authorities,
        }
    }
}
