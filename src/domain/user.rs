use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Role attribute attached to every account.
///
/// Authorization beyond "an authenticated user exists" is out of scope, so
/// the role currently only flows into the profile response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// A stored account record.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    /// Normalized email, the unique lookup key and token subject.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub enabled: bool,
    pub role: Role,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Account data as handed to the store; id and timestamps are generated at
/// save time.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub enabled: bool,
    pub role: Role,
}

/// Canonicalize an email for storage, lookup and token subjects.
///
/// Trim plus lowercase, nothing more: every comparison in the system happens
/// on the output of this function, so any additional folding would change
/// which addresses collide.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
