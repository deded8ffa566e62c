//! Compact signed token codec.
//!
//! Encodes claims into HS256-signed JWTs and decodes them back, keeping the
//! access and refresh trust domains apart: each kind has its own key pair
//! built once from configuration, and a token signed for one kind can never
//! verify under the other's secret.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::{DecodeError, TokenError};

use super::config::TokenServiceConfig;

/// Encoder/decoder for signed access and refresh tokens
pub struct TokenCodec {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
    expiry_exempt_validation: Validation,
}

impl TokenCodec {
    /// Build the codec from configuration
    ///
    /// Keys are derived once here and reused for the process lifetime.
    pub fn new(config: &TokenServiceConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is exact; the default 60s leeway would let dead tokens pass
        validation.leeway = 0;

        let mut expiry_exempt_validation = validation.clone();
        expiry_exempt_validation.validate_exp = false;

        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
            expiry_exempt_validation,
        }
    }

    /// Encode and sign a token of the given kind
    ///
    /// Deterministic for identical inputs; the kind is recorded as the JWT
    /// header `typ` tag and selects the signing secret.
    pub fn encode(
        &self,
        user_id: i64,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, issued_at, expires_at);

        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some(kind.tag().to_string());

        encode(&header, &claims, self.encoding_key(kind))
            .map_err(|_| TokenError::GenerationFailed)
    }

    /// Verify and decode a raw token as the given kind
    ///
    /// Verifies the signature with the kind's secret, checks structural
    /// validity and expiry, and confirms the header tag matches the kind.
    /// Side-effect-free.
    pub fn decode(&self, raw: &str, kind: TokenKind) -> Result<Claims, DecodeError> {
        self.decode_with(raw, kind, &self.validation)
    }

    /// Decode without the expiry check
    ///
    /// Logout needs the `exp` claim of a token that may already be past its
    /// natural expiry; signature and structure are still enforced.
    pub fn decode_ignoring_expiry(&self, raw: &str, kind: TokenKind) -> Result<Claims, DecodeError> {
        self.decode_with(raw, kind, &self.expiry_exempt_validation)
    }

    fn decode_with(
        &self,
        raw: &str,
        kind: TokenKind,
        validation: &Validation,
    ) -> Result<Claims, DecodeError> {
        let token_data = decode::<Claims>(raw, self.decoding_key(kind), validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DecodeError::Expired,
                ErrorKind::InvalidSignature => DecodeError::BadSignature,
                ErrorKind::InvalidAlgorithm => DecodeError::UnsupportedKind,
                _ => DecodeError::Malformed,
            })?;

        // The signature already binds the token to this kind's secret; the
        // header tag must agree as well
        if token_data.header.typ.as_deref() != Some(kind.tag()) {
            return Err(DecodeError::UnsupportedKind);
        }

        Ok(token_data.claims)
    }

    fn encoding_key(&self, kind: TokenKind) -> &EncodingKey {
        match kind {
            TokenKind::Access => &self.access_encoding,
            TokenKind::Refresh => &self.refresh_encoding,
        }
    }

    fn decoding_key(&self, kind: TokenKind) -> &DecodingKey {
        match kind {
            TokenKind::Access => &self.access_decoding,
            TokenKind::Refresh => &self.refresh_decoding,
        }
    }
}
