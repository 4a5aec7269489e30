use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SemanticError {
    #[error("embedding model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load embedding model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid scorer configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for SemanticError {
    fn from(err: candle_core::Error) -> Self {
        SemanticError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for SemanticError {
    fn from(err: std::io::Error) -> Self {
        SemanticError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
