use std::path::PathBuf;

use crate::semantic::error::SemanticError;

/// Default output embedding dimension (BERT-base hidden size).
pub const SEMANTIC_EMBEDDING_DIM: usize = 768;

/// Default max tokens fed to the model per text.
pub const SEMANTIC_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

/// Configuration for [`SemanticScorer`](super::SemanticScorer).
#[derive(Debug, Clone)]
pub struct SemanticConfig {
    /// Directory holding `config.json`, `model.safetensors` and
    /// `tokenizer.json`. `None` selects deterministic stub mode.
    pub model_path: Option<PathBuf>,
    /// Max tokens to consider per text.
    pub max_seq_len: usize,
    /// Embedding dimension produced in stub mode (the model backend uses the
    /// model's own hidden size).
    pub embedding_dim: usize,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            max_seq_len: SEMANTIC_MAX_SEQ_LEN,
            embedding_dim: SEMANTIC_EMBEDDING_DIM,
        }
    }
}

impl SemanticConfig {
    /// Configuration backed by a model directory.
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    /// Deterministic stub configuration (no model files required).
    pub fn stub() -> Self {
        Self::default()
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), SemanticError> {
        if self.max_seq_len == 0 {
            return Err(SemanticError::InvalidConfig {
                reason: "max_seq_len must be greater than 0".to_string(),
            });
        }

        if self.embedding_dim == 0 {
            return Err(SemanticError::InvalidConfig {
                reason: "embedding_dim must be greater than 0".to_string(),
            });
        }

        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err(SemanticError::InvalidConfig {
                reason: "model_path cannot be empty when provided".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `true` if the configured model directory exists.
    pub fn model_available(&self) -> bool {
        self.model_path.as_ref().is_some_and(|p| p.is_dir())
    }
}
