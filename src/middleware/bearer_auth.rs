//! Bearer token authentication middleware
//!
//! Inspects the Authorization header on every request, and when it carries a
//! valid token for a known account, attaches an [`AuthContext`] to the
//! request extensions. The middleware itself never rejects a request: missing,
//! malformed, expired, or otherwise unusable credentials simply leave the
//! request anonymous, and handlers that require identity fail through the
//! [`CurrentUser`](crate::extractors::current_user::CurrentUser) extractor.
//! Requests to public paths skip token processing entirely.

use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{debug, error, warn};

use crate::auth::jwt::{extract_subject, is_valid_for};
use crate::auth::AuthContext;
use crate::config::public_paths::is_public_path;
use crate::logging::pii::Redacted;
use crate::state::app_state::AppState;

pub struct BearerAuth;

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct BearerAuthMiddleware<S> {
    // Rc because the store lookup is awaited before the service is called.
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        if is_public_path(req.path()) {
            return Box::pin(service.call(req));
        }

        let token = match bearer_token(&req) {
            Some(token) => token,
            None => return Box::pin(service.call(req)),
        };

        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let state = match state {
                Some(state) => state,
                None => return service.call(req).await,
            };

            attach_auth_context(&req, &state, &token).await;
            service.call(req).await
        })
    }
}

/// Resolves the token's subject against the user store and, on success,
/// inserts an [`AuthContext`] into the request extensions. Every failure
/// mode is logged and swallowed so the request continues anonymously.
async fn attach_auth_context(req: &ServiceRequest, state: &AppState, token: &str) {
    let subject = match extract_subject(token, &state.security) {
        Ok(subject) => subject,
        Err(_) => {
            debug!("bearer token rejected, continuing unauthenticated");
            return;
        }
    };

    // A handler-level insert (e.g. in tests) takes precedence; scoped so the
    // extensions borrow is released before the store lookup.
    let already_authenticated = { req.extensions().get::<AuthContext>().is_some() };
    if already_authenticated {
        return;
    }

    match state.store.find_by_email(&subject).await {
        Ok(Some(user)) => {
            if is_valid_for(token, &user.email, &state.security, std::time::SystemTime::now()) {
                req.extensions_mut().insert(AuthContext { user });
            } else {
                warn!(
                    email = %Redacted(&subject),
                    "token failed validation for known account"
                );
            }
        }
        Ok(None) => {
            warn!(
                email = %Redacted(&subject),
                "token subject has no matching account"
            );
        }
        Err(err) => {
            error!(error = %err, "user lookup failed during token authentication");
        }
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
