//! Rubric scoring engine.
//!
//! Grades free-text exam answers by comparing a student's extracted answer
//! set against a model answer set. The upstream layers (OCR extraction, HTTP
//! API) hand this crate two `{raw key -> answer text}` maps; the engine
//! returns a per-question score breakdown and a best-N-per-section total.
//!
//! # Pipeline
//!
//! 1. [`QuestionKey`] classifies raw keys ("Q1A", "Q.2b") into a
//!    main-question/sub-part taxonomy; unclassifiable keys are skipped.
//! 2. [`SemanticScorer`] scores meaning overlap via sentence-embedding
//!    cosine similarity (candle BERT backend, or a deterministic stub).
//! 3. [`ThematicScorer`] scores vocabulary overlap via synonym-canonicalized
//!    bag-of-words cosine similarity over an immutable [`ThematicLexicon`].
//! 4. [`scoring::combine`] merges both signals into a capped, two-decimal
//!    mark; [`scoring::aggregate_total`] applies the best-N-per-section rule.
//! 5. [`EvaluationEngine::evaluate`] orchestrates the above and is the only
//!    public entry point with decision logic.
//!
//! # Failure model
//!
//! A scorer failure on one sub-question records a [`ScoringDiagnostic`] and
//! leaves that mark at 0.0; only a model set without classifiable keys fails
//! the call ([`EvaluationError::NoModelAnswers`]).

pub mod config;
pub mod constants;
pub mod engine;
pub mod question;
pub mod scoring;
pub mod semantic;
pub mod thematic;

pub use config::{Config, ConfigError};
pub use engine::{
    AnswerSet, EvaluationEngine, EvaluationError, EvaluationReport, EvaluationResult,
    ScoringDiagnostic,
};
pub use question::QuestionKey;
pub use scoring::{ScoreBreakdown, aggregate_total, combine, round_mark};
pub use semantic::{
    SEMANTIC_EMBEDDING_DIM, SEMANTIC_MAX_SEQ_LEN, SemanticConfig, SemanticError, SemanticScorer,
    cosine_similarity,
};
pub use thematic::{STOP_WORDS, SYNONYM_GROUPS, ThematicLexicon, ThematicScorer};
