//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A weight is negative or non-finite.
    #[error("invalid {name} '{value}': must be a finite value >= 0")]
    InvalidWeight { name: &'static str, value: f32 },

    /// Marks per sub-question must be a positive finite value.
    #[error("invalid marks_per_sub_question '{value}': must be a finite value > 0")]
    InvalidMarks { value: f32 },

    /// The per-section scoring quota must allow at least one sub-question.
    #[error("max_sub_questions_per_section must be at least 1")]
    InvalidSectionLimit,

    /// A float-valued environment variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    FloatParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// An integer-valued environment variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    IntParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
