//! Environment-backed configuration.
//!
//! Every scoring-policy knob has a default. Override with `RUBRIC_*`
//! environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_MARKS_PER_SUB_QUESTION, DEFAULT_MAX_SUB_QUESTIONS_PER_SECTION,
    DEFAULT_SEMANTIC_WEIGHT, DEFAULT_THEMATIC_WEIGHT, DEFAULT_TOTAL_POSSIBLE_MARKS,
};

/// Scoring-policy configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RUBRIC_*` overrides on top of defaults.
/// The five policy fields are read-only inputs to the engine; none of them is
/// fixed by the scoring algorithm itself.
#[derive(Debug, Clone)]
pub struct Config {
    /// Weight applied to the semantic similarity signal. Default: `0.5`.
    pub semantic_weight: f32,

    /// Weight applied to the thematic similarity signal. Default: `0.3`.
    pub thematic_weight: f32,

    /// Maximum mark a single sub-question can earn. Default: `7.5`.
    pub marks_per_sub_question: f32,

    /// Number of sub-question marks counted per section. Default: `2`.
    pub max_sub_questions_per_section: usize,

    /// Total marks the paper is out of. Reported to callers, never enforced
    /// against the computed total. Default: `30.0`.
    pub total_possible_marks: f32,

    /// Path to the sentence-embedding model directory (BERT + tokenizer).
    /// `None` means the semantic scorer runs in stub mode.
    pub model_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            semantic_weight: DEFAULT_SEMANTIC_WEIGHT,
            thematic_weight: DEFAULT_THEMATIC_WEIGHT,
            marks_per_sub_question: DEFAULT_MARKS_PER_SUB_QUESTION,
            max_sub_questions_per_section: DEFAULT_MAX_SUB_QUESTIONS_PER_SECTION,
            total_possible_marks: DEFAULT_TOTAL_POSSIBLE_MARKS,
            model_path: None,
        }
    }
}

impl Config {
    const ENV_SEMANTIC_WEIGHT: &'static str = "RUBRIC_SEMANTIC_WEIGHT";
    const ENV_THEMATIC_WEIGHT: &'static str = "RUBRIC_THEMATIC_WEIGHT";
    const ENV_MARKS_PER_SUB_QUESTION: &'static str = "RUBRIC_MARKS_PER_SUB_QUESTION";
    const ENV_MAX_SUB_QUESTIONS_PER_SECTION: &'static str =
        "RUBRIC_MAX_SUB_QUESTIONS_PER_SECTION";
    const ENV_TOTAL_POSSIBLE_MARKS: &'static str = "RUBRIC_TOTAL_POSSIBLE_MARKS";
    const ENV_MODEL_PATH: &'static str = "RUBRIC_MODEL_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let semantic_weight =
            Self::parse_f32_from_env(Self::ENV_SEMANTIC_WEIGHT, defaults.semantic_weight)?;
        let thematic_weight =
            Self::parse_f32_from_env(Self::ENV_THEMATIC_WEIGHT, defaults.thematic_weight)?;
        let marks_per_sub_question = Self::parse_f32_from_env(
            Self::ENV_MARKS_PER_SUB_QUESTION,
            defaults.marks_per_sub_question,
        )?;
        let max_sub_questions_per_section = Self::parse_usize_from_env(
            Self::ENV_MAX_SUB_QUESTIONS_PER_SECTION,
            defaults.max_sub_questions_per_section,
        )?;
        let total_possible_marks = Self::parse_f32_from_env(
            Self::ENV_TOTAL_POSSIBLE_MARKS,
            defaults.total_possible_marks,
        )?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);

        Ok(Self {
            semantic_weight,
            thematic_weight,
            marks_per_sub_question,
            max_sub_questions_per_section,
            total_possible_marks,
            model_path,
        })
    }

    /// Validates basic invariants (does not touch the filesystem beyond the
    /// model path checks).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("semantic_weight", self.semantic_weight),
            ("thematic_weight", self.thematic_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    name,
                    value,
                });
            }
        }

        if !self.marks_per_sub_question.is_finite() || self.marks_per_sub_question <= 0.0 {
            return Err(ConfigError::InvalidMarks {
                value: self.marks_per_sub_question,
            });
        }

        if self.max_sub_questions_per_section == 0 {
            return Err(ConfigError::InvalidSectionLimit);
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_f32_from_env(var_name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::FloatParseError {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::IntParseError {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
