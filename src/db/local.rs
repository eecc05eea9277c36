// src/db/local.rs
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::db::kv::KeyValueStore;
use crate::errors::StorageError;

/// Keys of the persisted application state.
pub mod keys {
    pub const AUTH_USER: &str = "auth_user";
    pub const OFFERS: &str = "offers";
    pub const FILTERS_SEARCH: &str = "filters_search";
    pub const FILTERS: &str = "filters_obj";
    pub const COLUMNS_VISIBLE: &str = "columns_visible";
}

/// JSON values over a [`KeyValueStore`].
///
/// `try_*` report failures. `get`/`set`/`remove` never fail: a read falls back
/// to the supplied default and a failed write is logged and dropped, leaving
/// the in-memory state as the only copy.
#[derive(Clone)]
pub struct LocalStorage {
    store: Arc<dyn KeyValueStore>,
}

impl LocalStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// `Ok(None)` for a missing or empty value.
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get_raw(key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    pub fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.store.set_raw(key, &raw)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(e) => {
                warn!(key, error = %e, "reading persisted state failed, using default");
                fallback
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            warn!(key, error = %e, "persisting state failed, keeping it in memory only");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!(key, error = %e, "removing persisted state failed");
        }
    }
}
