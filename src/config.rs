//! Chunking configuration.

use crate::error::{ChunkingError, Result};

/// Configuration for a single [`crate::chunk`] run.
///
/// # Example
///
/// ```rust
/// use markdown_chunker::ChunkingConfig;
///
/// let config = ChunkingConfig {
///     size: 800,
///     overlap: 100,
///     encoding_model: "gpt-4".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkingConfig {
    /// Target tokens per chunk. Must be at least 1.
    pub size: u32,
    /// Tokens of trailing context prepended from the previous chunk. Must be `< size`.
    pub overlap: u32,
    /// Tokenizer selector, e.g. `"gpt-4"`. Must be non-empty.
    pub encoding_model: String,
}

impl ChunkingConfig {
    /// Validate the configuration, returning the first violation found.
    ///
    /// Checked in the order `size`, then `overlap`, then `encoding_model`,
    /// matching the taxonomy in the chunker's error handling design.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(ChunkingError::ZeroSize);
        }
        if self.overlap >= self.size {
            return Err(ChunkingError::OverlapNotSmallerThanSize {
                overlap: self.overlap,
                size: self.size,
            });
        }
        if self.encoding_model.trim().is_empty() {
            return Err(ChunkingError::EmptyEncodingModel);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ChunkingConfig {
        ChunkingConfig { size: 100, overlap: 20, encoding_model: "gpt-4".to_string() }
    }

    #[test]
    fn accepts_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_zero_size() {
        let config = ChunkingConfig { size: 0, ..valid() };
        assert_eq!(config.validate(), Err(ChunkingError::ZeroSize));
    }

    #[test]
    fn rejects_overlap_equal_to_size() {
        let config = ChunkingConfig { size: 50, overlap: 50, ..valid() };
        assert_eq!(
            config.validate(),
            Err(ChunkingError::OverlapNotSmallerThanSize { overlap: 50, size: 50 })
        );
    }

    #[test]
    fn rejects_overlap_greater_than_size() {
        let config = ChunkingConfig { size: 50, overlap: 80, ..valid() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_encoding_model() {
        let config = ChunkingConfig { encoding_model: "   ".to_string(), ..valid() };
        assert_eq!(config.validate(), Err(ChunkingError::EmptyEncodingModel));
    }

    #[test]
    fn accepts_zero_overlap() {
        let config = ChunkingConfig { overlap: 0, ..valid() };
        assert!(config.validate().is_ok());
    }
}
