use std::env;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use jsonwebtoken::Algorithm;

use crate::AppError;

/// Configuration for token signing and verification.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Symmetric signing key (already base64-decoded).
    pub jwt_secret: Vec<u8>,
    /// How long issued tokens stay valid.
    pub token_ttl: Duration,
    /// Signing algorithm (HS256).
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given key bytes and TTL.
    pub fn new(jwt_secret: impl Into<Vec<u8>>, token_ttl: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl,
            algorithm: Algorithm::HS256,
        }
    }

    /// Load the signing configuration from the environment.
    ///
    /// `JWT_SECRET` is the base64-encoded symmetric key; `JWT_EXPIRATION` is
    /// the token TTL in milliseconds. Both are required with no default, and
    /// a missing or malformed value is a startup-fatal configuration error.
    pub fn from_env() -> Result<Self, AppError> {
        let raw_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::config("JWT_SECRET must be set".to_string()))?;
        let jwt_secret = STANDARD
            .decode(raw_secret.trim())
            .map_err(|e| AppError::config(format!("JWT_SECRET is not valid base64: {e}")))?;
        // HMAC-SHA256 wants a key at least as long as the digest
        if jwt_secret.len() < 32 {
            return Err(AppError::config(
                "JWT_SECRET must decode to at least 32 bytes".to_string(),
            ));
        }

        let raw_ttl = env::var("JWT_EXPIRATION")
            .map_err(|_| AppError::config("JWT_EXPIRATION must be set".to_string()))?;
        let ttl_ms: u64 = raw_ttl.trim().parse().map_err(|_| {
            AppError::config("JWT_EXPIRATION must be a whole number of milliseconds".to_string())
        })?;

        Ok(Self::new(jwt_secret, Duration::from_millis(ttl_ms)))
    }
}
