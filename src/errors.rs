// errors.rs
use thiserror::Error;

/// Errors surfaced while handling a request.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Form too large: over {0} bytes")]
    PayloadTooLarge(u64),
    #[error("Storage Error: {0}")]
    Storage(#[from] StorageError),
    #[error("Export Error: {0}")]
    Export(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge(_) => 413,
            ServerError::Storage(_) | ServerError::Export(_) | ServerError::InternalError => 500,
        }
    }
}

/// Failures of the persisted key-value state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
