//! Evaluation orchestration.
//!
//! [`EvaluationEngine`] is the crate's single entry point: it classifies the
//! model answer set's keys, scores every sub-question the student attempted
//! with both similarity signals, combines them into capped marks, and
//! aggregates the best-N-per-section total.
//!
//! A scorer failure on one sub-question leaves that mark at 0.0 and records a
//! [`ScoringDiagnostic`]; only a model set with no classifiable keys fails
//! the whole call.

pub mod error;
pub mod types;


pub use error::EvaluationError;
pub use types::{AnswerSet, EvaluationReport, EvaluationResult, ScoringDiagnostic};

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::question::QuestionKey;
use crate::scoring::{self, ScoreBreakdown};
use crate::semantic::{SemanticConfig, SemanticScorer};
use crate::thematic::ThematicScorer;

/// Grades a student answer set against a model answer set.
#[derive(Debug)]
pub struct EvaluationEngine {
    semantic: SemanticScorer,
    thematic: ThematicScorer,
    config: Config,
}

impl EvaluationEngine {
    /// Creates an engine from already-constructed scorers.
    ///
    /// The configuration is validated here; it is immutable for the engine's
    /// lifetime.
    pub fn new(
        semantic: SemanticScorer,
        thematic: ThematicScorer,
        config: Config,
    ) -> Result<Self, EvaluationError> {
        config.validate()?;

        Ok(Self {
            semantic,
            thematic,
            config,
        })
    }

    /// Creates an engine from a [`Config`], loading the embedding model from
    /// `config.model_path` (stub mode when unset).
    pub fn from_config(config: Config) -> Result<Self, EvaluationError> {
        let semantic_config = match config.model_path {
            Some(ref path) => SemanticConfig::new(path),
            None => SemanticConfig::stub(),
        };

        let semantic = SemanticScorer::load(semantic_config)?;
        Self::new(semantic, ThematicScorer::new(), config)
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluates a student answer set against a model answer set.
    ///
    /// Only sub-questions present in both sets (by exact raw key) are scored;
    /// every other slot derived from the model set stays at 0.0. Identical
    /// inputs always produce identical results.
    pub fn evaluate(
        &self,
        model_answers: &AnswerSet,
        student_answers: &AnswerSet,
    ) -> Result<EvaluationResult, EvaluationError> {
        // Classify each model key exactly once; the same index drives both
        // breakdown initialization and the scoring pass. Sorted iteration
        // keeps the result stable when distinct raw keys (e.g. "Q1A" and
        // "q1a") classify to the same slot.
        let mut breakdown = ScoreBreakdown::new();
        let mut classified: BTreeMap<&str, QuestionKey> = BTreeMap::new();

        for raw_key in model_answers.keys() {
            let Some(key) = QuestionKey::parse(raw_key) else {
                debug!(key = %raw_key, "Skipping unclassifiable model key");
                continue;
            };

            breakdown
                .entry(key.main_question.clone())
                .or_default()
                .insert(key.sub_part.clone(), 0.0);
            classified.insert(raw_key.as_str(), key);
        }

        if breakdown.is_empty() {
            return Err(EvaluationError::NoModelAnswers);
        }

        let mut diagnostics: Vec<ScoringDiagnostic> = Vec::new();
        let mut scored = 0usize;

        for (&raw_key, key) in &classified {
            let Some(student_text) = student_answers.get(raw_key) else {
                continue;
            };
            let model_text = &model_answers[raw_key];

            if model_text.is_empty() || student_text.is_empty() {
                debug!(key = %raw_key, "Skipping sub-question with empty text");
                continue;
            }

            let semantic = match self.semantic.score(model_text, student_text) {
                Ok(score) => score,
                Err(e) => {
                    warn!(key = %raw_key, error = %e, "Semantic scoring failed, mark stays 0.0");
                    diagnostics.push(ScoringDiagnostic {
                        key: raw_key.to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            let thematic = self.thematic.score(model_text, student_text);

            let mark = scoring::combine(semantic, thematic, &self.config);

            debug!(
                key = %raw_key,
                semantic,
                thematic,
                mark,
                "Scored sub-question"
            );

            // Guard against a classification mismatch producing a slot the
            // initialization pass never created.
            if let Some(slot) = breakdown
                .get_mut(&key.main_question)
                .and_then(|section| section.get_mut(&key.sub_part))
            {
                *slot = mark;
                scored += 1;
            }
        }

        let total_marks = scoring::aggregate_total(&breakdown, &self.config);

        diagnostics.sort_by(|a, b| a.key.cmp(&b.key));

        info!(
            sections = breakdown.len(),
            scored,
            failed = diagnostics.len(),
            total_marks,
            "Evaluation complete"
        );

        Ok(EvaluationResult {
            total_marks,
            score_breakdown: breakdown,
            diagnostics,
        })
    }

    /// Evaluates and bundles the result with the echoed inputs for the API
    /// layer.
    pub fn evaluate_report(
        &self,
        model_answers: AnswerSet,
        student_answers: AnswerSet,
    ) -> Result<EvaluationReport, EvaluationError> {
        let result = self.evaluate(&model_answers, &student_answers)?;
        Ok(EvaluationReport::new(
            result,
            &self.config,
            model_answers,
            student_answers,
        ))
    }
}
