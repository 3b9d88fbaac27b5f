use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::trace_ctx::{self, TRACE_ID_HEADER};

/// Wire shape for error responses (RFC 7807 style).
///
/// Deliberately carries no per-request data: two requests failing for the
/// same reason produce byte-identical bodies. The trace id travels in the
/// `x-trace-id` response header instead.
#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { detail: String },
    #[error("Duplicate email")]
    DuplicateEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account disabled")]
    AccountDisabled,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid token")]
    TokenInvalid,
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable machine-readable code for this error variant.
    fn code(&self) -> String {
        match self {
            AppError::Validation { .. } => "VALIDATION".to_string(),
            AppError::DuplicateEmail => "DUPLICATE_EMAIL".to_string(),
            AppError::InvalidCredentials => "INVALID_CREDENTIALS".to_string(),
            AppError::AccountDisabled => "ACCOUNT_DISABLED".to_string(),
            AppError::Unauthorized => "UNAUTHORIZED".to_string(),
            AppError::TokenInvalid => "TOKEN_INVALID".to_string(),
            AppError::Internal { .. } => "INTERNAL".to_string(),
            AppError::Config { .. } => "CONFIG_ERROR".to_string(),
        }
    }

    /// User-facing message for this error variant.
    ///
    /// `Internal` and `Config` carry the message they were constructed with;
    /// construction sites are responsible for passing a client-safe message
    /// and logging the underlying cause separately.
    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail } => detail.clone(),
            AppError::DuplicateEmail => "An account with this email already exists".to_string(),
            AppError::InvalidCredentials => "Invalid email or password".to_string(),
            AppError::AccountDisabled => {
                "Account is disabled. Please contact support.".to_string()
            }
            AppError::Unauthorized => "Authentication required".to_string(),
            AppError::TokenInvalid => "Invalid or malformed token".to_string(),
            AppError::Internal { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::AccountDisabled => StatusCode::UNAUTHORIZED,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid(detail: String) -> Self {
        Self::Validation { detail }
    }

    pub fn duplicate_email() -> Self {
        Self::DuplicateEmail
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn account_disabled() -> Self {
        Self::AccountDisabled
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn token_invalid() -> Self {
        Self::TokenInvalid
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let detail = self.detail();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://propertypulse.app/errors/{code}"),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail,
            code,
        };

        let mut builder = HttpResponse::build(status);
        builder
            .content_type("application/problem+json")
            .insert_header((TRACE_ID_HEADER, trace_id));

        // RFC 7235: challenge header on every 401
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header(("WWW-Authenticate", "Bearer"));
        }

        builder.json(problem_details)
    }
}
