//! Error types. Input errors propagate to callers; model errors are absorbed by
//! [`crate::model::ModelHandle`] and never leave the crate's scoring path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentinelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("text too short: {len} characters (minimum {min})")]
    InputTooShort { len: usize, min: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Error)]
pub enum ModelError {
    #[error("expected {expected} features, got {actual}")]
    InvalidFeatureVector { expected: usize, actual: usize },

    #[error("model unavailable: {0}")]
    Unavailable(String),

    #[error("prediction failed: {0}")]
    PredictionFailed(String),

    #[error("backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, SentinelError>;
