//! Mark computation: signal combination and sectioned aggregation.
//!
//! The combiner merges the semantic and thematic signals into a capped
//! per-sub-question mark; the aggregator applies the best-N-per-section rule
//! to produce the total. Both round to two decimals so totals are
//! reproducible across runs.


use std::collections::BTreeMap;

use crate::config::Config;

/// Per-section, per-sub-part mark table: main question -> sub-part -> mark.
///
/// Initialized from the model answer set's classifiable keys only; every slot
/// defaults to `0.0` before scoring. `BTreeMap` keeps serialization order
/// deterministic.
pub type ScoreBreakdown = BTreeMap<String, BTreeMap<String, f32>>;

/// Rounds to two decimal places (the precision contract for stored marks).
pub fn round_mark(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Combines the two similarity signals into a capped sub-question mark.
///
/// `normalized = semantic_weight * semantic + thematic_weight * thematic`;
/// the mark is `normalized * marks_per_sub_question`, capped at
/// `marks_per_sub_question` (the weights need not sum to 1), and rounded to
/// two decimals before storage.
pub fn combine(semantic: f32, thematic: f32, config: &Config) -> f32 {
    let normalized = config.semantic_weight * semantic + config.thematic_weight * thematic;
    let mark = (normalized * config.marks_per_sub_question).min(config.marks_per_sub_question);
    round_mark(mark)
}

/// Sums the top `max_sub_questions_per_section` marks of each section.
///
/// A student who answers more sub-parts than the quota gets no credit for the
/// excess; sections with fewer sub-parts than the quota contribute all of
/// them. The total is rounded to two decimals.
pub fn aggregate_total(breakdown: &ScoreBreakdown, config: &Config) -> f32 {
    let mut total = 0.0f32;

    for section_marks in breakdown.values() {
        let mut marks: Vec<f32> = section_marks.values().copied().collect();
        marks.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

        total += marks
            .iter()
            .take(config.max_sub_questions_per_section)
            .sum::<f32>();
    }

    round_mark(total)
}
