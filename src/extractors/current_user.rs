use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::AuthContext;
use crate::domain::user::User;
use crate::error::AppError;

/// The authenticated user for the current request.
///
/// Resolves from the [`AuthContext`] that `BearerAuth` stores in the request
/// extensions. When no context is present the extractor fails with a 401,
/// which is the single place anonymous requests to protected handlers are
/// turned away.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().cloned();

        ready(
            context
                .map(|ctx| CurrentUser { user: ctx.user })
                .ok_or_else(AppError::unauthorized),
        )
    }
}
