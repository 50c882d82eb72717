//! The tokenizer capability and its process-wide registry.
//!
//! The chunker never implements a tokenizer itself; it consumes one through
//! the [`Tokenizer`] trait, looked up by name from [`TokenizerRegistry`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use tiktoken_rs::CoreBPE;

/// A tokenizer capability: encode text to token ids, decode ids back to
/// text, and count tokens. `count_tokens` defaults to
/// `encode_to_ids(text).len()`, which holds for every tokenizer that ships
/// with this crate; override it only if a faster incremental count is
/// available.
pub trait Tokenizer: Send + Sync {
    /// Encode `text` into a sequence of token ids.
    fn encode_to_ids(&self, text: &str) -> Vec<u32>;

    /// Decode a sequence of token ids back into text.
    fn decode(&self, ids: &[u32]) -> String;

    /// Count the tokens `text` encodes to.
    fn count_tokens(&self, text: &str) -> u32 {
        self.encode_to_ids(text).len() as u32
    }
}

/// A [`Tokenizer`] backed by `tiktoken-rs`'s byte-pair encodings.
pub struct TiktokenTokenizer {
    bpe: CoreBPE,
}

impl TiktokenTokenizer {
    /// Resolve a tokenizer for `encoding_model`, trying it as a model name
    /// first (`"gpt-4"`, `"gpt-4o"`, …) and falling back to the default
    /// encoding if the name isn't recognized.
    fn for_model(encoding_model: &str) -> Self {
        let bpe = tiktoken_rs::get_bpe_from_model(encoding_model)
            .unwrap_or_else(|_| tiktoken_rs::cl100k_base().expect("cl100k_base encoding must always load"));
        Self { bpe }
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn encode_to_ids(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_ordinary(text).into_iter().map(|id| id as u32).collect()
    }

    fn decode(&self, ids: &[u32]) -> String {
        let ids: Vec<usize> = ids.iter().map(|&id| id as usize).collect();
        self.bpe.decode(ids).unwrap_or_default()
    }
}

static REGISTRY: Lazy<RwLock<HashMap<String, Arc<dyn Tokenizer>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Process-wide, read-mostly cache of tokenizers keyed by `encoding_model`.
///
/// Safe to publish across threads once a tokenizer has been resolved; the
/// chunker never mutates a tokenizer concurrently with itself, only the
/// registry's lookup map is shared.
pub struct TokenizerRegistry;

impl TokenizerRegistry {
    /// Look up (or lazily build and cache) the tokenizer for `encoding_model`.
    ///
    /// Unknown names fall back to the default encoding rather than erroring:
    /// the chunker itself never fails on tokenizer selection.
    pub fn get(encoding_model: &str) -> Arc<dyn Tokenizer> {
        if let Some(tokenizer) = REGISTRY.read().unwrap().get(encoding_model) {
            return Arc::clone(tokenizer);
        }

        let tokenizer: Arc<dyn Tokenizer> = Arc::new(TiktokenTokenizer::for_model(encoding_model));
        if tiktoken_rs::get_bpe_from_model(encoding_model).is_err() {
            tracing::warn!(
                encoding_model,
                "unrecognized encoding_model, falling back to default tokenizer"
            );
        }

        REGISTRY
            .write()
            .unwrap()
            .insert(encoding_model.to_string(), Arc::clone(&tokenizer));
        tokenizer
    }
}
