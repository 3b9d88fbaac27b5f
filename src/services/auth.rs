//! Registration and login flows.
//!
//! Validation happens here against the raw request fields, in a fixed order,
//! so the first failing rule determines the message a client sees. Anything
//! that goes wrong past validation (hashing, persistence, token issuance) is
//! logged with its cause and surfaced as a generic retryable failure.

use std::time::SystemTime;

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::jwt::issue_token;
use crate::auth::password::{hash_password, verify_password};
use crate::domain::user::{normalize_email, NewUser, Role};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::state::security_config::SecurityConfig;
use crate::store::{StoreError, UserStore};

/// Registration payload. Missing fields deserialize to empty strings so the
/// validation rules below produce field-specific messages instead of a
/// deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Create an account and sign the new user in.
///
/// Returns the issued access token; the caller wraps it in the response
/// envelope. Duplicate emails fail with `DuplicateEmail` whether caught by
/// the pre-check or by the store's uniqueness enforcement at save time.
pub async fn register(
    store: &dyn UserStore,
    security: &SecurityConfig,
    request: RegisterRequest,
) -> Result<String, AppError> {
    validate_registration(&request)?;

    let email = normalize_email(&request.email);

    match store.exists_by_email(&email).await {
        Ok(true) => return Err(AppError::duplicate_email()),
        Ok(false) => {}
        Err(err) => {
            error!(error = %err, "duplicate-email check failed");
            return Err(registration_failed());
        }
    }

    let password_hash = hash_password(&request.password).map_err(|err| {
        error!(error = %err, "password hashing failed");
        registration_failed()
    })?;

    let new_user = NewUser {
        email,
        first_name: request.first_name.trim().to_string(),
        last_name: request.last_name.trim().to_string(),
        phone: request.phone.map(|p| p.trim().to_string()),
        password_hash,
        enabled: true,
        role: Role::User,
    };

    let user = match store.save(new_user).await {
        Ok(user) => user,
        // A concurrent registration winning the race is the same failure as
        // the pre-check catching it.
        Err(StoreError::DuplicateEmail) => return Err(AppError::duplicate_email()),
        Err(err) => {
            error!(error = %err, "user persistence failed");
            return Err(registration_failed());
        }
    };

    let token = issue_token(&user.email, SystemTime::now(), security).map_err(|err| {
        error!(error = %err, "token issuance failed after registration");
        registration_failed()
    })?;

    info!(user_id = %user.id, email = %Redacted(&user.email), "account registered");
    Ok(token)
}

/// Verify credentials and sign the user in.
///
/// The existence and enabled checks run before password verification: a
/// disabled account with the right password gets an accurate error, while
/// an unknown email and a wrong password are indistinguishable.
pub async fn authenticate(
    store: &dyn UserStore,
    security: &SecurityConfig,
    request: LoginRequest,
) -> Result<String, AppError> {
    if request.email.trim().is_empty() {
        return Err(AppError::invalid("Email is required".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::invalid("Password is required".to_string()));
    }

    let email = normalize_email(&request.email);

    let user = match store.find_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!(email = %Redacted(&email), "login attempt with unknown email");
            return Err(AppError::invalid_credentials());
        }
        Err(err) => {
            error!(error = %err, "user lookup failed during login");
            return Err(login_failed());
        }
    };

    if !user.enabled {
        warn!(email = %Redacted(&email), "login attempt for disabled account");
        return Err(AppError::account_disabled());
    }

    if !verify_password(&request.password, &user.password_hash) {
        warn!(email = %Redacted(&email), "login attempt with wrong password");
        return Err(AppError::invalid_credentials());
    }

    let token = issue_token(&user.email, SystemTime::now(), security).map_err(|err| {
        error!(error = %err, "token issuance failed after login");
        login_failed()
    })?;

    info!(email = %Redacted(&email), "login succeeded");
    Ok(token)
}

fn validate_registration(request: &RegisterRequest) -> Result<(), AppError> {
    if request.email.trim().is_empty() {
        return Err(AppError::invalid("Email is required".to_string()));
    }
    if request.password.chars().count() < 6 {
        return Err(AppError::invalid(
            "Password must be at least 6 characters long".to_string(),
        ));
    }
    if request.first_name.trim().is_empty() {
        return Err(AppError::invalid("First name is required".to_string()));
    }
    if request.last_name.trim().is_empty() {
        return Err(AppError::invalid("Last name is required".to_string()));
    }
    Ok(())
}

fn registration_failed() -> AppError {
    AppError::internal("Registration failed. Please try again later.".to_string())
}

fn login_failed() -> AppError {
    AppError::internal("Login failed. Please try again later.".to_string())
}
