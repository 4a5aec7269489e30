//! Question-key classification.
//!
//! Raw answer keys arrive from the OCR layer in loose shapes ("Q1A", "Q.2b",
//! "q12"). [`QuestionKey::parse`] maps them onto the canonical
//! main-question/sub-part taxonomy; keys with no `Q<digits>` token are noise
//! and classify to `None` rather than an error.

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MAIN_SUB_PART;

static MAIN_QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Q[.\-\s]?(\d+)").expect("main question pattern is valid"));

static SUB_PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z])$").expect("sub-part pattern is valid"));

/// Canonical identity of a gradable unit: a main question plus a sub-part.
///
/// `sub_part` is `"MAIN"` when the raw key carries no trailing letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionKey {
    /// Main question token, uppercased (e.g. `"Q1"`).
    pub main_question: String,
    /// Sub-part letter, uppercased (e.g. `"A"`), or `"MAIN"`.
    pub sub_part: String,
}

impl QuestionKey {
    /// Classifies a raw answer key.
    ///
    /// Returns `None` when the key contains no `Q<digits>` token; callers
    /// skip such keys. Deterministic and side-effect free.
    pub fn parse(raw: &str) -> Option<Self> {
        let main = MAIN_QUESTION_RE.captures(raw)?;
        let main_question = format!("Q{}", main.get(1)?.as_str());

        let sub_part = SUB_PART_RE
            .captures(raw.trim_end())
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_else(|| MAIN_SUB_PART.to_string());

        Some(Self {
            main_question,
            sub_part,
        })
    }

    /// Returns `true` if this key has no sub-part letter.
    pub fn is_main(&self) -> bool {
        self.sub_part == MAIN_SUB_PART
    }
}

impl std::fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_main() {
            write!(f, "{}", self.main_question)
        } else {
            write!(f, "{}{}", self.main_question, self.sub_part)
        }
    }
}
