use actix_web::web;

pub mod auth;
pub mod health;
pub mod user;

/// Configure application routes for the server and for test harnesses.
///
/// Paths inside each module are relative; the scopes here are the single
/// place the URL prefixes are spelled out.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
    cfg.service(web::scope("/api/user").configure(user::configure_routes));
}
