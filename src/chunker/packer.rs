//! The recursive token-budgeted packer: greedily accumulates fragments into
//! chunks, descending the separator ladder only for fragments that overflow
//! the budget on their own.

use std::sync::Arc;

use crate::chunker::provenance::ProvenanceMap;
use crate::ladder;
use crate::metadata::Chunk;
use crate::segmentation::fragment::split_to_fragments;
use crate::tokenizer::Tokenizer;

struct PackBuffer {
    text: String,
    tokens: u32,
    document_ids: indexmap::IndexSet<String>,
}

impl PackBuffer {
    fn new() -> Self {
        Self { text: String::new(), tokens: 0, document_ids: indexmap::IndexSet::new() }
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push(&mut self, content: &str, tokens: u32, document_ids: indexmap::IndexSet<String>) {
        self.text.push_str(content);
        self.tokens += tokens;
        self.document_ids.extend(document_ids);
    }
}

/// Packs a normalized stream into token-budgeted chunks, recursively
/// re-splitting any fragment that overflows `size` using the next ladder
/// level, terminating in a per-character fallback.
pub struct Packer<'a> {
    stream: &'a str,
    size: u32,
    tokenizer: Arc<dyn Tokenizer>,
    provenance: &'a ProvenanceMap,
}

impl<'a> Packer<'a> {
    pub fn new(stream: &'a str, size: u32, tokenizer: Arc<dyn Tokenizer>, provenance: &'a ProvenanceMap) -> Self {
        Self { stream, size, tokenizer, provenance }
    }

    /// Pack the whole stream into chunks.
    pub fn pack(&self) -> Vec<Chunk> {
        let mut output = Vec::new();
        self.pack_at_level(self.stream, 0, &mut output);
        output
    }

    fn pack_at_level(&self, text: &str, level: usize, output: &mut Vec<Chunk>) {
        if text.is_empty() {
            return;
        }

        let terminal = level >= ladder::DEPTH;
        let fragments = if terminal {
            split_to_fragments(text, None)
        } else {
            let seps = ladder::level_separators(level);
            let refs: Vec<&str> = seps.iter().map(String::as_str).collect();
            split_to_fragments(text, Some(&refs))
        };

        let mut buffer = PackBuffer::new();

        for fragment in fragments {
            if fragment.content.is_empty() {
                continue;
            }

            let frag_tokens = self.tokenizer.count_tokens(fragment.content);

            if buffer.tokens + frag_tokens <= self.size {
                let ids = self.provenance.document_ids_for(self.stream, fragment.content);
                buffer.push(fragment.content, frag_tokens, ids);
            } else if frag_tokens > self.size && !terminal {
                self.flush(&mut buffer, output);
                self.pack_at_level(fragment.content, level + 1, output);
            } else {
                self.flush(&mut buffer, output);
                let ids = self.provenance.document_ids_for(self.stream, fragment.content);
                buffer.push(fragment.content, frag_tokens, ids);
            }
        }

        self.flush(&mut buffer, output);
    }

    fn flush(&self, buffer: &mut PackBuffer, output: &mut Vec<Chunk>) {
        if buffer.is_empty() {
            return;
        }
        let taken = std::mem::replace(buffer, PackBuffer::new());
        let mut chunk = Chunk::new(taken.text, taken.document_ids);
        chunk.token_count = taken.tokens;
        output.push(chunk);
    }
}
