use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;

/// Profile view of the authenticated user. The password hash never leaves
/// the domain type.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
}

async fn profile(current: CurrentUser) -> Result<HttpResponse, AppError> {
    let user = current.user;

    Ok(HttpResponse::Ok().json(UserProfile {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        phone: user.phone,
        role: user.role.as_str().to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::get().to(profile));
}
