//! Maps byte ranges of the concatenated, normalized stream back to the
//! input slice(s) that contributed them.

use indexmap::IndexSet;

/// A sorted, non-overlapping run-length table: `(start, end, document_id)`.
pub struct ProvenanceMap {
    ranges: Vec<(usize, usize, String)>,
}

impl ProvenanceMap {
    pub fn new(ranges: Vec<(usize, usize, String)>) -> Self {
        debug_assert!(ranges.windows(2).all(|w| w[0].1 <= w[1].0), "ranges must be sorted, non-overlapping");
        Self { ranges }
    }

    /// The document ids whose range overlaps `fragment`, which must be a
    /// sub-slice of the same `stream` this map was built from.
    pub fn document_ids_for(&self, stream: &str, fragment: &str) -> IndexSet<String> {
        if fragment.is_empty() {
            return IndexSet::new();
        }

        let base = stream.as_ptr() as usize;
        let start = fragment.as_ptr() as usize - base;
        let end = start + fragment.len();

        let mut ids = IndexSet::new();
        for (r_start, r_end, doc_id) in &self.ranges {
            if *r_start < end && start < *r_end {
                ids.insert(doc_id.clone());
            }
        }
        ids
    }
}
