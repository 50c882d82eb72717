//! Caller-owned input slices.

/// A labeled slice of input text. Callers assemble one or more of these
/// (per document, per section, whatever granularity the caller owns) and
/// pass them to [`crate::chunk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSlice {
    /// Identifier of the document this slice's text belongs to.
    pub document_id: String,
    /// The slice's raw text, in whatever newline convention the caller has.
    pub text: String,
}

impl ChunkSlice {
    /// Construct a slice from an id and text.
    pub fn new(document_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { document_id: document_id.into(), text: text.into() }
    }
}

/// Normalize and concatenate `slices` into a single stream, recording the
/// byte range each slice's normalized text occupies. Slices that normalize
/// to an empty string contribute no range and are skipped entirely.
pub(crate) fn build_stream(slices: &[ChunkSlice]) -> (String, Vec<(usize, usize, String)>) {
    let mut stream = String::new();
    let mut ranges = Vec::new();

    for slice in slices {
        let normalized = crate::newline::normalize_newlines(&slice.text);
        if normalized.is_empty() {
            continue;
        }
        let start = stream.len();
        stream.push_str(&normalized);
        ranges.push((start, stream.len(), slice.document_id.clone()));
    }

    (stream, ranges)
}
