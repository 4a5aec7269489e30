//! Semantic similarity via sentence embeddings.
//!
//! [`SemanticScorer`] encodes both texts with a BERT sentence embedder (mean
//! pooling, L2-normalized) and returns their cosine similarity clamped to
//! `[0, 1]`. Use [`SemanticConfig::stub`] for tests/examples without model
//! files: the stub derives a deterministic unit vector from the text, so
//! identical texts still score `1.0`.

/// Scorer configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
pub(crate) mod model;


pub use config::{SEMANTIC_EMBEDDING_DIM, SEMANTIC_MAX_SEQ_LEN, SemanticConfig};
pub use error::SemanticError;

use candle_core::{Device, Tensor};
use tracing::{debug, info, warn};

use device::select_device;
use model::{BertSentenceEncoder, load_tokenizer_with_truncation};

enum ScorerBackend {
    Model {
        encoder: BertSentenceEncoder,
        tokenizer: tokenizers::Tokenizer,
        device: Device,
    },
    Stub,
    #[cfg(test)]
    Failing,
}

/// Embedding-based meaning similarity scorer (supports stub mode).
pub struct SemanticScorer {
    backend: ScorerBackend,
    config: SemanticConfig,
}

impl std::fmt::Debug for SemanticScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScorer")
            .field(
                "backend",
                &match &self.backend {
                    ScorerBackend::Model { device, .. } => format!("Model({:?})", device),
                    ScorerBackend::Stub => "Stub".to_string(),
                    #[cfg(test)]
                    ScorerBackend::Failing => "Failing".to_string(),
                },
            )
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SemanticScorer {
    /// Loads the scorer from a config. The model is loaded eagerly, once, at
    /// construction; the scorer is read-only afterwards.
    pub fn load(config: SemanticConfig) -> Result<Self, SemanticError> {
        config.validate()?;

        let Some(ref model_path) = config.model_path else {
            warn!("Semantic scorer running in STUB mode (testing only)");
            return Ok(Self {
                backend: ScorerBackend::Stub,
                config,
            });
        };

        if !config.model_available() {
            return Err(SemanticError::ModelNotFound {
                path: model_path.clone(),
            });
        }

        let device = select_device()?;
        debug!(?device, "Selected compute device for semantic scorer");

        let encoder = BertSentenceEncoder::load(model_path, &device).map_err(|e| {
            SemanticError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer_with_truncation(model_path, config.max_seq_len)
            .map_err(|e| SemanticError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        info!(
            model_path = %model_path.display(),
            max_seq_len = config.max_seq_len,
            "Sentence embedding model loaded"
        );

        Ok(Self {
            backend: ScorerBackend::Model {
                encoder,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Constructs a stub scorer (no model files required).
    pub fn stub() -> Result<Self, SemanticError> {
        Self::load(SemanticConfig::stub())
    }

    /// Constructs a scorer whose backend fails every call, for exercising
    /// failure-isolation paths.
    #[cfg(test)]
    pub(crate) fn failing() -> Self {
        Self {
            backend: ScorerBackend::Failing,
            config: SemanticConfig::stub(),
        }
    }

    /// Scores the semantic closeness of two texts in `[0, 1]`.
    ///
    /// Cosine similarity of normalized embeddings can mathematically dip
    /// below zero for adversarial inputs; the result is clamped here so
    /// downstream mark computation never sees a negative signal.
    pub fn score(&self, text_a: &str, text_b: &str) -> Result<f32, SemanticError> {
        let embedding_a = self.embed(text_a)?;
        let embedding_b = self.embed(text_b)?;

        let similarity = cosine_similarity(&embedding_a, &embedding_b).clamp(0.0, 1.0);

        debug!(
            len_a = text_a.len(),
            len_b = text_b.len(),
            similarity,
            "Computed semantic similarity"
        );

        Ok(similarity)
    }

    /// Generates an L2-normalized embedding for a single string.
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        match &self.backend {
            ScorerBackend::Model {
                encoder,
                tokenizer,
                device,
            } => self.embed_with_model(text, encoder, tokenizer, device),
            ScorerBackend::Stub => Ok(self.embed_stub(text)),
            #[cfg(test)]
            ScorerBackend::Failing => Err(SemanticError::InferenceFailed {
                reason: "embedding backend unavailable".to_string(),
            }),
        }
    }

    fn embed_with_model(
        &self,
        text: &str,
        encoder: &BertSentenceEncoder,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, SemanticError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| SemanticError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let tokens = encoding.get_ids();
        if tokens.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        let input_ids = Tensor::new(tokens, device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        debug!(
            text_len = text.len(),
            token_count = tokens.len(),
            "Generating sentence embedding"
        );

        let pooled = encoder
            .forward(&input_ids, &token_type_ids, &attention_mask)
            .map_err(|e| SemanticError::InferenceFailed {
                reason: format!("BERT forward pass failed: {}", e),
            })?;

        let embedding = pooled.flatten_all()?.to_vec1::<f32>()?;

        Ok(normalize(embedding))
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        debug!(text_len = text.len(), "Generating stub embedding");

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(self.config.embedding_dim);
        let mut state = seed;

        for _ in 0..self.config.embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        normalize(embedding)
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, ScorerBackend::Stub)
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, ScorerBackend::Model { .. })
    }

    /// Returns the scorer configuration.
    pub fn config(&self) -> &SemanticConfig {
        &self.config
    }
}

fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}

/// Cosine similarity between two f32 vectors.
///
/// Returns `0.0` for mismatched lengths, empty vectors, or zero-norm inputs.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
