//! Thematic similarity: synonym-canonicalized bag-of-words cosine.
//!
//! Deliberately lightweight: whitespace tokenization plus a fixed stopword
//! set and synonym table, no linguistic tokenizer and no runtime downloads.
//! The lexicon is built once (see [`ThematicLexicon::shared`]) and injected
//! as an immutable `Arc`.

/// Stopword and synonym tables.
pub mod lexicon;


pub use lexicon::{STOP_WORDS, SYNONYM_GROUPS, ThematicLexicon};

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::semantic::cosine_similarity;

/// Scores vocabulary/topic overlap between two texts in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct ThematicScorer {
    lexicon: Arc<ThematicLexicon>,
}

impl Default for ThematicScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ThematicScorer {
    /// Creates a scorer over the process-wide lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: ThematicLexicon::shared(),
        }
    }

    /// Creates a scorer over a custom lexicon.
    pub fn with_lexicon(lexicon: Arc<ThematicLexicon>) -> Self {
        Self { lexicon }
    }

    /// Computes the thematic similarity between two texts.
    ///
    /// Edge cases, in priority order:
    /// - either raw input empty: `0.0`
    /// - both texts clean down to nothing (all stopwords/punctuation): `1.0`
    ///   (neither carries a theme, hence identical)
    /// - exactly one cleans down to nothing: `0.0`
    /// - otherwise: cosine similarity of term-frequency vectors over the
    ///   shared vocabulary.
    pub fn score(&self, text_a: &str, text_b: &str) -> f32 {
        if text_a.is_empty() || text_b.is_empty() {
            return 0.0;
        }

        let tokens_a = self.preprocess(text_a);
        let tokens_b = self.preprocess(text_b);

        if tokens_a.is_empty() && tokens_b.is_empty() {
            return 1.0;
        }
        if tokens_a.is_empty() || tokens_b.is_empty() {
            return 0.0;
        }

        let (vec_a, vec_b) = vectorize(&tokens_a, &tokens_b);
        let similarity = cosine_similarity(&vec_a, &vec_b);

        debug!(
            terms_a = tokens_a.len(),
            terms_b = tokens_b.len(),
            similarity,
            "Computed thematic similarity"
        );

        similarity
    }

    /// Tokenizes, strips punctuation and stopwords, and canonicalizes
    /// synonyms. Returned tokens are lowercased.
    fn preprocess(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|token| {
                token
                    .to_lowercase()
                    .trim_matches(|c: char| c.is_ascii_punctuation())
                    .to_string()
            })
            .filter(|token| !token.is_empty() && !self.lexicon.is_stop_word(token))
            .map(|token| self.lexicon.canonicalize(&token).to_string())
            .collect()
    }
}

/// Builds term-frequency vectors over the shared vocabulary of both token
/// lists.
fn vectorize(tokens_a: &[String], tokens_b: &[String]) -> (Vec<f32>, Vec<f32>) {
    let mut vocabulary: BTreeMap<&str, usize> = BTreeMap::new();
    for token in tokens_a.iter().chain(tokens_b.iter()) {
        let next_index = vocabulary.len();
        vocabulary.entry(token.as_str()).or_insert(next_index);
    }

    let mut vec_a = vec![0.0f32; vocabulary.len()];
    let mut vec_b = vec![0.0f32; vocabulary.len()];

    for token in tokens_a {
        vec_a[vocabulary[token.as_str()]] += 1.0;
    }
    for token in tokens_b {
        vec_b[vocabulary[token.as_str()]] += 1.0;
    }

    (vec_a, vec_b)
}
