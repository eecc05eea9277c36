// src/auth/credentials.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Demo accounts, compared in plaintext.
pub const USERS: [(&str, &str); 2] = [("user1", "Test@2025a"), ("user2", "Test@2025b")];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Невалидни данни за вход")]
    InvalidCredentials,
}

/// Name of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unknown user and wrong password are reported the same way.
pub fn login(username: &str, password: &str) -> Result<Identity, AuthError> {
    USERS
        .iter()
        .find(|(user, _)| *user == username)
        .filter(|(_, pass)| *pass == password)
        .map(|(user, _)| Identity::new(*user))
        .ok_or(AuthError::InvalidCredentials)
}
