//! Error types for the chunker's public entry points.

use thiserror::Error;

/// Errors returned by [`crate::chunk`] and [`crate::ChunkingConfig::validate`].
///
/// Every variant is a configuration problem caught before any chunking work
/// begins; the chunker never fails partway through a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkingError {
    /// `size` was zero. A chunk budget of zero tokens can never be satisfied.
    #[error("chunk size must be at least 1 token, got 0")]
    ZeroSize,

    /// `overlap` was not strictly smaller than `size`.
    #[error("overlap ({overlap}) must be smaller than size ({size})")]
    OverlapNotSmallerThanSize {
        /// The configured overlap.
        overlap: u32,
        /// The configured size.
        size: u32,
    },

    /// `encoding_model` was empty or whitespace-only.
    #[error("encoding_model must not be empty")]
    EmptyEncodingModel,
}

/// Convenience alias for `Result<T, ChunkingError>`.
pub type Result<T> = std::result::Result<T, ChunkingError>;
