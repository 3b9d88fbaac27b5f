use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware with a restrictive, explicit configuration.
///
/// Origins come from `CORS_ALLOWED_ORIGINS` (comma-separated), falling back
/// to the local frontend dev server. Credentialed requests are allowed, so
/// every origin is registered explicitly rather than via wildcard.
pub fn cors_middleware() -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .supports_credentials()
        .max_age(3600);

    for origin in allowed_origins() {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

/// Origins from the environment, string-validated, with a Vite dev fallback.
fn allowed_origins() -> Vec<String> {
    let configured: Vec<String> = env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(ToString::to_string)
        .collect();

    if configured.is_empty() {
        vec!["http://localhost:5173".to_string()]
    } else {
        configured
    }
}
