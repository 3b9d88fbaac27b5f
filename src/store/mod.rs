pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{NewUser, User};

pub use memory::MemoryUserStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-key violation on the normalized email.
    #[error("email already registered")]
    DuplicateEmail,
    /// Operational failure in the backing store.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Gateway to wherever account records live.
///
/// All three operations take the already-normalized email and match it
/// exactly; normalization happens before the store is ever consulted. `save`
/// is the uniqueness enforcer of last resort: under concurrent registration
/// the pre-flight `exists_by_email` can pass for both requests, and the
/// loser's `save` must come back as `DuplicateEmail`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    async fn save(&self, new_user: NewUser) -> Result<User, StoreError>;
}
