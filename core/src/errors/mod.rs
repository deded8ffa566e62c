//! Domain-specific error types for token and authentication operations.
//!
//! Validation failures are ordinary, request-recoverable rejections: the
//! boundary layer turns them into authentication-failure responses. Nothing
//! here is process-fatal.

use thiserror::Error;

/// Errors produced while decoding a signed token
///
/// Decoding is side-effect-free; these distinguish why a raw token string
/// could not be turned into claims.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Signature does not verify under the secret for the requested kind
    #[error("invalid token signature")]
    BadSignature,

    /// Structurally invalid token
    #[error("malformed token")]
    Malformed,

    /// Token is past its natural expiry
    #[error("token expired")]
    Expired,

    /// Header kind tag does not match the requested kind
    #[error("unsupported token kind")]
    UnsupportedKind,
}

/// Token service errors
///
/// The rejection taxonomy surfaced to the boundary layer. `Malformed` and
/// `Expired` are determined from the token alone and never require a store
/// round trip.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Structurally invalid or wrong-secret token
    #[error("malformed token")]
    Malformed,

    /// Token is past its natural expiry
    #[error("token expired")]
    Expired,

    /// The token's own revocation entry was found: it was logged out and is
    /// now being replayed
    #[error("token reused after logout")]
    PossibleHijack,

    /// The revocation check could not be completed; never downgraded to an
    /// accept, so the caller can fail closed
    #[error("revocation store unavailable")]
    StoreUnavailable,

    /// Token could not be encoded
    #[error("token generation failed")]
    GenerationFailed,
}

impl From<DecodeError> for TokenError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Expired => TokenError::Expired,
            DecodeError::BadSignature | DecodeError::Malformed | DecodeError::UnsupportedKind => {
                TokenError::Malformed
            }
        }
    }
}

/// Revocation store errors
///
/// The store is an external collaborator; any failure to complete an
/// operation collapses to unavailability with a transport-level message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("revocation store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Authentication errors covering the validate-then-resolve path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The validated user id has no matching user
    #[error("user not found")]
    UserNotFound,

    #[error(transparent)]
    Token(#[from] TokenError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_collapse() {
        assert_eq!(TokenError::from(DecodeError::BadSignature), TokenError::Malformed);
        assert_eq!(TokenError::from(DecodeError::Malformed), TokenError::Malformed);
        assert_eq!(TokenError::from(DecodeError::UnsupportedKind), TokenError::Malformed);
        assert_eq!(TokenError::from(DecodeError::Expired), TokenError::Expired);
    }

    #[test]
    fn test_auth_error_from_token_error() {
        let err = AuthError::from(TokenError::PossibleHijack);
        assert_eq!(err, AuthError::Token(TokenError::PossibleHijack));
    }
}
