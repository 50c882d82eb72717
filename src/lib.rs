// src/lib.rs
//! # Markdown Chunker
//!
//! A token-budgeted chunker for Markdown-formatted RAG inputs. Splits one or
//! more labeled input slices into chunks that respect a token budget,
//! preferring to break at structural Markdown boundaries (blank lines,
//! headings, fenced/literal blocks) before falling back to progressively
//! weaker separators, and finally to a per-character split when nothing else
//! fits.
//!
//! ## Quick Start
//!
//! ```rust
//! use markdown_chunker::{chunk, ChunkSlice, ChunkingConfig};
//!
//! let slices = vec![ChunkSlice::new("doc-1", "# Introduction\n\nThis is a test document.")];
//! let config = ChunkingConfig { size: 200, overlap: 20, encoding_model: "gpt-4".to_string() };
//! let chunks = chunk(&slices, &config).unwrap();
//!
//! for c in &chunks {
//!     println!("chunk: {} tokens", c.token_count);
//! }
//! ```

pub mod chunker;
pub mod config;
pub mod error;
pub mod ladder;
pub mod metadata;
pub mod newline;
pub mod postprocess;
pub mod segmentation;
pub mod slice;
pub mod tokenizer;

pub use config::ChunkingConfig;
pub use error::{ChunkingError, Result};
pub use metadata::Chunk;
pub use slice::ChunkSlice;
pub use tokenizer::{Tokenizer, TokenizerRegistry};

use chunker::packer::Packer;
use chunker::provenance::ProvenanceMap;

/// Split `slices` into token-budgeted chunks under `config`.
///
/// Slices are normalized (newlines only; nothing else) and concatenated in
/// order into a single stream before chunking, so a chunk boundary never
/// depends on which slice a given span of text came from, only
/// [`Chunk::document_ids`] tracks provenance. An empty stream (no slices, or
/// every slice empty after normalization) yields an empty chunk list.
///
/// Returns an error if `config` fails [`ChunkingConfig::validate`]; the
/// chunker itself never fails partway through a run.
pub fn chunk(slices: &[ChunkSlice], config: &ChunkingConfig) -> Result<Vec<Chunk>> {
    config.validate()?;

    let (stream, ranges) = slice::build_stream(slices);
    if stream.is_empty() {
        return Ok(Vec::new());
    }

    let tokenizer = TokenizerRegistry::get(&config.encoding_model);
    let provenance = ProvenanceMap::new(ranges);
    let packer = Packer::new(&stream, config.size, std::sync::Arc::clone(&tokenizer), &provenance);

    let mut chunks = packer.pack();
    postprocess::merge_image_chunks(&mut chunks);
    postprocess::apply_overlap(&mut chunks, tokenizer.as_ref(), config.overlap);
    postprocess::finalize(&mut chunks, tokenizer.as_ref());

    tracing::debug!(input_slices = slices.len(), output_chunks = chunks.len(), "chunked stream");

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: u32, overlap: u32) -> ChunkingConfig {
        ChunkingConfig { size, overlap, encoding_model: "gpt-4".to_string() }
    }

    #[test]
    fn short_document_is_a_single_chunk() {
        let slices = vec![ChunkSlice::new("doc", "Short text")];
        let chunks = chunk(&slices, &config(100, 0)).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "Short text");
        assert!(chunks[0].document_ids.contains("doc"));
    }

    #[test]
    fn no_slices_yields_no_chunks() {
        let chunks = chunk(&[], &config(100, 0)).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn all_empty_slices_yield_no_chunks() {
        let slices = vec![ChunkSlice::new("a", ""), ChunkSlice::new("b", "")];
        let chunks = chunk(&slices, &config(100, 0)).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_before_chunking() {
        let slices = vec![ChunkSlice::new("doc", "text")];
        let err = chunk(&slices, &config(0, 0)).unwrap_err();
        assert_eq!(err, ChunkingError::ZeroSize);
    }

    #[test]
    fn multiple_slices_are_tracked_by_document_id() {
        let slices = vec![
            ChunkSlice::new("doc-a", "Paragraph from document A.\n\n"),
            ChunkSlice::new("doc-b", "Paragraph from document B."),
        ];
        let chunks = chunk(&slices, &config(200, 0)).unwrap();
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].document_ids.contains("doc-a"));
        assert!(chunks[0].document_ids.contains("doc-b"));
    }

    #[test]
    fn large_document_produces_multiple_budget_respecting_chunks() {
        let text = "word ".repeat(1000);
        let slices = vec![ChunkSlice::new("doc", text)];
        let tokenizer = TokenizerRegistry::get("gpt-4");
        let cfg = config(50, 10);
        let chunks = chunk(&slices, &cfg).unwrap();

        assert!(chunks.len() > 1);
        for c in &chunks {
            let counted = tokenizer.count_tokens(&c.text);
            assert!(counted as f64 <= cfg.size as f64 * 1.5);
        }
    }

    #[test]
    fn overlap_carries_context_into_the_next_chunk() {
        let text = "word ".repeat(200);
        let slices = vec![ChunkSlice::new("doc", text)];
        let chunks = chunk(&slices, &config(30, 8)).unwrap();
        assert!(chunks.len() > 1);
        // Every chunk after the first should share some trailing text of its
        // predecessor as a prefix of its own text.
        for pair in chunks.windows(2) {
            assert_ne!(pair[0].text, pair[1].text);
        }
    }

    #[test]
    fn image_only_fragment_never_starts_a_chunk_on_its_own() {
        let text = "Some introductory text that is long enough to stand alone.\n\n![a diagram](diagram.png)";
        let slices = vec![ChunkSlice::new("doc", text)];
        let chunks = chunk(&slices, &config(8, 0)).unwrap();
        for c in chunks.iter().skip(1) {
            assert!(!c.text.trim_start().starts_with("!["));
        }
    }

    #[test]
    fn carriage_returns_are_normalized_before_chunking() {
        let slices = vec![ChunkSlice::new("doc", "a\r\nb\rc\nd")];
        let chunks = chunk(&slices, &config(100, 0)).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "a\nb\nc\nd");
    }
}
