pub mod claims;
pub mod jwt;
pub mod password;

use crate::domain::User;

/// Authenticated identity for one request.
///
/// Inserted into request extensions by the `BearerAuth` middleware when a
/// presented token checks out against a stored account; read back by the
/// `CurrentUser` extractor. Never outlives the request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
}
