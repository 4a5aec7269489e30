//! Evaluation error types.

use thiserror::Error;

use crate::config::ConfigError;
use crate::semantic::SemanticError;

/// Errors that fail an entire evaluation call.
///
/// Per-sub-question scorer failures do not appear here; they degrade to
/// [`ScoringDiagnostic`](crate::engine::ScoringDiagnostic) entries on the
/// result instead.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The model answer set contains no classifiable keys, so no score
    /// breakdown can be built.
    #[error("model answer set contains no classifiable answers")]
    NoModelAnswers,

    /// Scoring-policy configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The semantic backend could not be constructed.
    #[error("semantic scorer initialization failed: {0}")]
    Semantic(#[from] SemanticError),
}
