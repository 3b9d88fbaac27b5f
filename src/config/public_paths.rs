//! Allow-list of paths the request authentication filter skips entirely.
//!
//! Root, static assets, the health check and the two credential endpoints
//! are reachable without any token; everything else goes through bearer
//! extraction (which may still leave the request unauthenticated).

/// Paths matched exactly.
const PUBLIC_EXACT: &[&str] = &["/", "/index.html", "/health", "/favicon.ico"];

/// Path prefixes (static asset trees and the credential endpoints).
const PUBLIC_PREFIXES: &[&str] = &[
    "/css/",
    "/js/",
    "/images/",
    "/static/",
    "/assets/",
    "/api/auth/login",
    "/api/auth/register",
];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_EXACT.contains(&path) || PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}
