//! Cross-cutting, shared constants.
//!
//! Scoring-policy defaults live here; [`crate::config::Config`] reads them as
//! fallbacks when the corresponding `RUBRIC_*` variable is unset. The values
//! are policy, not algorithm: callers may override every one of them.

/// Default weight applied to the semantic (embedding cosine) signal.
pub const DEFAULT_SEMANTIC_WEIGHT: f32 = 0.5;

/// Default weight applied to the thematic (bag-of-words cosine) signal.
pub const DEFAULT_THEMATIC_WEIGHT: f32 = 0.3;

/// Default maximum mark a single sub-question can earn.
pub const DEFAULT_MARKS_PER_SUB_QUESTION: f32 = 7.5;

/// Default number of sub-question marks counted per section (best-N rule).
pub const DEFAULT_MAX_SUB_QUESTIONS_PER_SECTION: usize = 2;

/// Default total marks the paper is out of (reported, not enforced).
pub const DEFAULT_TOTAL_POSSIBLE_MARKS: f32 = 30.0;

/// Max tokens fed to the embedding model per answer text.
pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

/// Sub-part label used when a question key carries no trailing letter.
pub const MAIN_SUB_PART: &str = "MAIN";
