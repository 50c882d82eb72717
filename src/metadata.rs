//! The [`Chunk`] produced by [`crate::chunk`].

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A contiguous, token-budgeted region of the normalized input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk's text, including any overlap prefix from the prior chunk.
    pub text: String,
    /// `count_tokens(text)` under the run's tokenizer, recomputed after
    /// image merging and overlap prefixing.
    pub token_count: u32,
    /// Every input slice whose content contributed non-empty text to this
    /// chunk, in first-contribution order.
    pub document_ids: IndexSet<String>,
}

impl Chunk {
    pub(crate) fn new(text: String, document_ids: IndexSet<String>) -> Self {
        Self { text, token_count: 0, document_ids }
    }
}
