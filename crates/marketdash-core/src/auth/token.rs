use std::sync::Arc;

use tracing::{debug, warn};

use crate::storage::{KeyringStore, Storage, StorageError};

/// Keychain service name for durable storage
pub const SERVICE_NAME: &str = "marketdash";

/// Fixed storage key for the auth token
pub const TOKEN_KEY: &str = "token";

/// Environment variable consulted when durable storage has no token
pub const TOKEN_ENV_VAR: &str = "MARKETDASH_TOKEN";

#[derive(Clone)]
pub struct TokenStore {
    store: Arc<dyn Storage>,
    env_fallback: bool,
}

impl TokenStore {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self {
            store,
            env_fallback: false,
        }
    }

    /// Token store backed by the OS keychain, falling back to `MARKETDASH_TOKEN`.
    pub fn keychain() -> Self {
        Self {
            store: Arc::new(KeyringStore::new(SERVICE_NAME)),
            env_fallback: true,
        }
    }

    /// The persisted token. Empty values and storage failures read as absent.
    pub fn load(&self) -> Option<String> {
        let stored = match self.store.get_item(TOKEN_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to read auth token");
                None
            }
        };

        let token = stored.or_else(|| {
            if self.env_fallback {
                std::env::var(TOKEN_ENV_VAR).ok()
            } else {
                None
            }
        });

        match token {
            Some(t) if !t.trim().is_empty() => Some(t.trim().to_string()),
            _ => {
                debug!("No auth token available");
                None
            }
        }
    }

    pub fn save(&self, token: &str) -> Result<(), StorageError> {
        self.store.set_item(TOKEN_KEY, token.trim())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_item(TOKEN_KEY)
    }
}
