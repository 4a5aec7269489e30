use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::scoring::ScoreBreakdown;

/// Raw answer key -> answer text, as produced by the upstream OCR layer.
///
/// Ordering is irrelevant; keys loosely match `Q<digits>[<letter>]` but
/// malformed keys are tolerated and skipped during classification.
pub type AnswerSet = HashMap<String, String>;

/// Records a sub-question whose scoring failed.
///
/// A failed sub-question keeps its 0.0 mark; it does not abort the
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringDiagnostic {
    /// Raw answer key of the affected sub-question.
    pub key: String,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Outcome of one evaluation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Best-N-per-section total, rounded to two decimals.
    pub total_marks: f32,
    /// Per-section, per-sub-part marks.
    pub score_breakdown: ScoreBreakdown,
    /// Sub-questions whose scoring failed (marks left at 0.0).
    pub diagnostics: Vec<ScoringDiagnostic>,
}

impl EvaluationResult {
    /// Returns `true` if every attempted sub-question scored without error.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Looks up the mark for a main question / sub-part pair.
    pub fn mark(&self, main_question: &str, sub_part: &str) -> Option<f32> {
        self.score_breakdown
            .get(main_question)
            .and_then(|section| section.get(sub_part))
            .copied()
    }
}

/// Caller-facing report: the result plus the echoed inputs the API layer
/// forwards for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub total_marks: f32,
    pub max_possible_marks: f32,
    pub score_breakdown: ScoreBreakdown,
    pub diagnostics: Vec<ScoringDiagnostic>,
    pub model_answers: AnswerSet,
    pub student_answers: AnswerSet,
}

impl EvaluationReport {
    /// Assembles a report from an evaluation result and its inputs.
    pub fn new(
        result: EvaluationResult,
        config: &Config,
        model_answers: AnswerSet,
        student_answers: AnswerSet,
    ) -> Self {
        Self {
            total_marks: result.total_marks,
            max_possible_marks: config.total_possible_marks,
            score_breakdown: result.score_breakdown,
            diagnostics: result.diagnostics,
            model_answers,
            student_answers,
        }
    }
}
