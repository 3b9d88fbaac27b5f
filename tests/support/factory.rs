//! Account fixtures seeded directly into the store.

use backend::domain::user::{NewUser, Role, User};
use backend::hash_password;
use backend::state::app_state::AppState;

/// Insert an account without going through the registration endpoint.
///
/// The email must already be normalized (trimmed, lowercased); the store
/// matches keys exactly.
pub async fn seed_user(state: &AppState, email: &str, password: &str, enabled: bool) -> User {
    let new_user = NewUser {
        email: email.to_string(),
        first_name: "Seed".to_string(),
        last_name: "User".to_string(),
        phone: None,
        password_hash: hash_password(password).expect("should hash seed password"),
        enabled,
        role: Role::User,
    };

    state.store.save(new_user).await.expect("should seed user")
}
