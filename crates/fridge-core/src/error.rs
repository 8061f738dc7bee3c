use thiserror::Error;

pub type Result<T> = std::result::Result<T, FridgeError>;

#[derive(Debug, Error)]
pub enum FridgeError {
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Invalid day context: {0}")]
    InvalidDay(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A rules source (usually the HTTP API) failed to deliver.
    #[error("Rules source error: {0}")]
    Source(String),
}
