use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use time::OffsetDateTime;
use uuid::Uuid;

use async_trait::async_trait;

use crate::domain::{NewUser, User};
use crate::store::{StoreError, UserStore};

/// Concurrent in-memory account store, keyed by normalized email.
///
/// Backs the binary and the test suites. Uniqueness is enforced atomically
/// through the map's entry API, so two racing `save` calls for the same
/// email resolve to exactly one winner.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<String, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(email).map(|entry| entry.value().clone()))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.users.contains_key(email))
    }

    async fn save(&self, new_user: NewUser) -> Result<User, StoreError> {
        let now = OffsetDateTime::now_utc();
        match self.users.entry(new_user.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateEmail),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4(),
                    email: new_user.email,
                    first_name: new_user.first_name,
                    last_name: new_user.last_name,
                    phone: new_user.phone,
                    password_hash: new_user.password_hash,
                    enabled: new_user.enabled,
                    role: new_user.role,
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }
}
