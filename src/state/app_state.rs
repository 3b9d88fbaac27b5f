use std::sync::Arc;

use crate::store::{MemoryUserStore, UserStore};

use super::security_config::SecurityConfig;

/// Shared per-process state handed to every worker.
#[derive(Clone)]
pub struct AppState {
    /// Account store behind the gateway trait
    pub store: Arc<dyn UserStore>,
    /// Security configuration including signing settings
    pub security: SecurityConfig,
}

impl AppState {
    /// Create a new AppState over the given store and security config
    pub fn new(store: Arc<dyn UserStore>, security: SecurityConfig) -> Self {
        Self { store, security }
    }

    /// Create an AppState backed by a fresh in-memory store
    pub fn in_memory(security: SecurityConfig) -> Self {
        Self::new(Arc::new(MemoryUserStore::new()), security)
    }
}
