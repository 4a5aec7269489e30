use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_transformers::models::bert::{BertModel, Config};
use std::io;
use std::path::Path;
use tokenizers::Tokenizer;

struct BertForSentenceEmbeddingImpl {
    bert: BertModel,
}

impl BertForSentenceEmbeddingImpl {
    fn load(vb: candle_nn::VarBuilder, config: &Config) -> Result<Self> {
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), config)?
        } else {
            BertModel::load(vb.clone(), config)?
        };

        Ok(Self { bert })
    }

    /// Mean pooling over the attention mask, matching the
    /// `bert-base-nli-mean-tokens` sentence-embedding recipe.
    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Tensor> {
        // [1, seq_len, hidden_size]
        let hidden_states = self
            .bert
            .forward(input_ids, token_type_ids, Some(attention_mask))?;

        // [1, seq_len, 1]
        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;

        let summed = hidden_states.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?.clamp(1e-9, f64::INFINITY)?;

        // [1, hidden_size]
        summed.broadcast_div(&counts)
    }
}

/// Candle wrapper around a BERT sentence embedder with mean pooling.
#[derive(Clone)]
pub struct BertSentenceEncoder(std::sync::Arc<BertForSentenceEmbeddingImpl>);

impl BertSentenceEncoder {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb = unsafe {
            candle_nn::VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)?
        };

        let model = BertForSentenceEmbeddingImpl::load(vb, &config)?;

        Ok(Self(std::sync::Arc::new(model)))
    }

    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Tensor> {
        self.0.forward(input_ids, token_type_ids, attention_mask)
    }
}

/// Loads `tokenizer.json` from the model directory with truncation enabled.
pub fn load_tokenizer_with_truncation(model_dir: &Path, max_len: usize) -> io::Result<Tokenizer> {
    use tokenizers::TruncationParams;

    let tokenizer_path = if model_dir.is_dir() {
        model_dir.join("tokenizer.json")
    } else {
        model_dir.to_path_buf()
    };

    let mut tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    Ok(tokenizer)
}
