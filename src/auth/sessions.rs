// src/auth/sessions.rs
use tracing::info;

use crate::auth::credentials::Identity;
use crate::db::{keys, LocalStorage};

pub fn load_session(storage: &LocalStorage) -> Option<Identity> {
    storage.get(keys::AUTH_USER, None)
}

pub fn save_session(storage: &LocalStorage, identity: &Identity) {
    storage.set(keys::AUTH_USER, identity);
    info!(user = %identity, "logged in");
}

pub fn clear_session(storage: &LocalStorage) {
    storage.remove(keys::AUTH_USER);
    info!("logged out");
}
