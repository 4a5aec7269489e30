//! Immutable stopword + synonym tables.
//!
//! Built once behind a [`LazyLock`] and shared read-only between scorers.
//! Every member of a synonym group canonicalizes to the lexicographically
//! smallest member of that group, so "quick" and "fast" count as the same
//! term during vectorization.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

/// Function words ignored during thematic comparison.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "of", "to", "in", "on", "at",
    "for", "with", "and", "or", "but", "it", "this", "that", "as", "by",
];

/// Synonym groups standardizing common vocabulary.
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    &["quick", "fast", "rapid", "speedy", "swift", "prompt"],
    &["intelligent", "smart", "clever", "bright", "brilliant", "wise"],
    &["happy", "joyful", "cheerful", "glad", "delighted", "content", "pleased"],
    &["sad", "unhappy", "sorrowful", "depressed", "miserable", "down"],
    &["angry", "mad", "furious", "irate", "annoyed", "outraged"],
    &["car", "automobile", "vehicle", "ride"],
    &["job", "work", "occupation", "profession", "career"],
    &["house", "home", "residence", "dwelling", "abode"],
    &["big", "large", "huge", "gigantic", "massive", "enormous"],
    &["small", "little", "tiny", "miniature", "petite"],
    &["start", "begin", "commence", "initiate", "launch"],
    &["end", "finish", "conclude", "terminate", "complete"],
    &["run", "sprint", "jog", "dash"],
    &["walk", "stroll", "saunter", "amble"],
    &["see", "observe", "view", "watch", "spot", "glimpse"],
    &["say", "tell", "speak", "utter", "state", "declare"],
    &["think", "ponder", "consider", "reflect", "contemplate"],
    &["eat", "consume", "devour", "ingest", "feast"],
    &["help", "assist", "aid", "support", "serve"],
    &["buy", "purchase", "acquire", "obtain", "procure"],
    &["beautiful", "pretty", "gorgeous", "lovely", "attractive", "stunning"],
    &["ugly", "unattractive", "hideous", "unsightly"],
    &["important", "significant", "crucial", "vital", "essential"],
    &["hard", "difficult", "challenging", "tough"],
    &["easy", "simple", "effortless", "straightforward"],
];

static SHARED: LazyLock<Arc<ThematicLexicon>> =
    LazyLock::new(|| Arc::new(ThematicLexicon::from_tables(STOP_WORDS, SYNONYM_GROUPS)));

/// Stopword set and synonym canonicalization map.
///
/// Immutable after construction; safe to share across concurrent evaluations.
#[derive(Debug)]
pub struct ThematicLexicon {
    stop_words: HashSet<&'static str>,
    synonym_map: HashMap<&'static str, &'static str>,
}

impl ThematicLexicon {
    /// Returns the process-wide lexicon, built on first use.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Builds a lexicon from explicit tables.
    pub fn from_tables(stop_words: &[&'static str], groups: &[&[&'static str]]) -> Self {
        let synonym_map = groups
            .iter()
            .flat_map(|group| {
                let canonical = group
                    .iter()
                    .copied()
                    .min()
                    .unwrap_or_default();
                group.iter().map(move |&word| (word, canonical))
            })
            .collect();

        Self {
            stop_words: stop_words.iter().copied().collect(),
            synonym_map,
        }
    }

    /// Returns `true` if `token` is a stopword.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Maps `token` to its group's canonical member; unknown tokens pass
    /// through unchanged.
    pub fn canonicalize<'a>(&self, token: &'a str) -> &'a str {
        self.synonym_map.get(token).copied().unwrap_or(token)
    }

    /// Number of entries in the synonym map.
    pub fn synonym_count(&self) -> usize {
        self.synonym_map.len()
    }
}
