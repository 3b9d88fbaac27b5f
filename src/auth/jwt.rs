use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;
use tracing::debug;

use crate::auth::claims::Claims;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Mint a signed access token for `subject` with the configured TTL.
pub fn issue_token(
    subject: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    issue_token_with_claims(subject, HashMap::new(), now, security)
}

/// Mint a signed access token carrying additional custom claims.
///
/// `iat` and `exp` are second-granularity (JWT numeric dates); the expiry is
/// computed in milliseconds before truncation so a millisecond TTL behaves
/// the same as in the configuration.
pub fn issue_token_with_claims(
    subject: &str,
    extra: HashMap<String, Value>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let issued_ms = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_millis() as i64;
    let ttl_ms = security.token_ttl.as_millis() as i64;

    let claims = Claims {
        sub: subject.to_string(),
        iat: issued_ms / 1000,
        exp: (issued_ms + ttl_ms) / 1000,
        extra,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
}

/// Verify the signature and structure of a token and return its claims.
///
/// Expiry is deliberately not checked here; `is_expired`/`is_valid_for`
/// evaluate it against a caller-supplied clock. Any decode failure (bad
/// signature, wrong algorithm, malformed or truncated payload) maps to
/// `AppError::TokenInvalid`.
pub fn decode_claims(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!(error = %e, "token decode failed");
        AppError::token_invalid()
    })
}

/// Verify a token and return its subject (the normalized email).
pub fn extract_subject(token: &str, security: &SecurityConfig) -> Result<String, AppError> {
    decode_claims(token, security).map(|claims| claims.sub)
}

/// Whether the token's expiry lies strictly before `now`.
///
/// Fail-closed: a token that cannot be decoded is reported as expired.
pub fn is_expired(token: &str, security: &SecurityConfig, now: SystemTime) -> bool {
    match decode_claims(token, security) {
        Ok(claims) => expired(claims.exp, now),
        Err(_) => true,
    }
}

/// Whether the token is usable on behalf of `expected_subject`: the decoded
/// subject must match and the token must not be expired.
///
/// Fail-closed: any decode or clock failure yields `false`, never an error.
pub fn is_valid_for(
    token: &str,
    expected_subject: &str,
    security: &SecurityConfig,
    now: SystemTime,
) -> bool {
    match decode_claims(token, security) {
        Ok(claims) => claims.sub == expected_subject && !expired(claims.exp, now),
        Err(_) => false,
    }
}

fn expired(exp_secs: i64, now: SystemTime) -> bool {
    let now_ms = match now.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        // A clock before the epoch gives no usable answer; deny.
        Err(_) => return true,
    };
    exp_secs.saturating_mul(1000) < now_ms
}
