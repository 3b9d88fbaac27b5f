use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::auth as auth_service;
use crate::services::auth::{LoginRequest, RegisterRequest};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub message: String,
}

/// Create an account and return a token for the fresh session
async fn register(
    body: ValidatedJson<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let token = auth_service::register(
        app_state.store.as_ref(),
        &app_state.security,
        body.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        message: "Account created successfully! Welcome to Property Pulse.".to_string(),
    }))
}

/// Exchange credentials for a token
async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let token = auth_service::authenticate(
        app_state.store.as_ref(),
        &app_state.security,
        body.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        message: "Welcome back to Property Pulse!".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register));
    cfg.route("/login", web::post().to(login));
}
