// src/config.rs
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DB_PATH: &str = "oferti.sqlite3";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub addr: SocketAddr,
    pub workers: usize,
}

impl AppConfig {
    /// Read `OFERTI_DB_PATH`, `OFERTI_ADDR` and `OFERTI_WORKERS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_path = lookup("OFERTI_DB_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let addr_raw = lookup("OFERTI_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: "OFERTI_ADDR",
                value: addr_raw.clone(),
            })?;

        let workers = match lookup("OFERTI_WORKERS") {
            None => DEFAULT_WORKERS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "OFERTI_WORKERS",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            db_path: PathBuf::from(db_path),
            addr,
            workers,
        })
    }
}
