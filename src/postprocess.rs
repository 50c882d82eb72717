//! Post-packing shaping: merge stray image chunks into their predecessor,
//! prepend a token-exact overlap prefix, then recompute final token counts.

use crate::metadata::Chunk;
use crate::tokenizer::Tokenizer;

/// Merge any chunk whose left-trimmed text starts with `![` into the chunk
/// immediately before it, repeating until a full pass makes no change.
/// The first chunk is never merged away, since there is nothing before it.
pub fn merge_image_chunks(chunks: &mut Vec<Chunk>) {
    loop {
        let mut changed = false;
        let mut i = 1;
        while i < chunks.len() {
            if chunks[i].text.trim_start().starts_with("![") {
                let image_chunk = chunks.remove(i);
                join_image_into_previous(&mut chunks[i - 1], image_chunk);
                changed = true;
                // Don't advance: the chunk now at `i` (previously `i + 1`)
                // might itself need merging into the same predecessor.
            } else {
                i += 1;
            }
        }
        if !changed {
            break;
        }
    }
}

fn join_image_into_previous(prev: &mut Chunk, image_chunk: Chunk) {
    if !prev.text.ends_with('\n') && !image_chunk.text.starts_with('\n') {
        prev.text.push_str("\n\n");
    }
    prev.text.push_str(&image_chunk.text);
    for id in image_chunk.document_ids {
        prev.document_ids.insert(id);
    }
}

/// Prepend the last `overlap` tokens of each chunk's predecessor onto it.
/// Applied strictly left to right so that a chunk's own overlap prefix is
/// already in place by the time it becomes the source for the next chunk's
/// prefix.
pub fn apply_overlap(chunks: &mut [Chunk], tokenizer: &dyn Tokenizer, overlap: u32) {
    if overlap == 0 {
        return;
    }
    for i in 1..chunks.len() {
        let prev_ids = tokenizer.encode_to_ids(&chunks[i - 1].text);
        let take = (overlap as usize).min(prev_ids.len());
        if take == 0 {
            continue;
        }
        let tail = &prev_ids[prev_ids.len() - take..];
        let prefix = tokenizer.decode(tail);
        prepend_with_join(&mut chunks[i].text, &prefix);
    }
}

fn prepend_with_join(text: &mut String, prefix: &str) {
    if prefix.is_empty() {
        return;
    }
    let needs_space = !prefix.ends_with(char::is_whitespace)
        && !text.starts_with(char::is_whitespace)
        && !text.is_empty();

    let mut joined = String::with_capacity(prefix.len() + 1 + text.len());
    joined.push_str(prefix);
    if needs_space {
        joined.push(' ');
    }
    joined.push_str(text);
    *text = joined;
}

/// Recompute every chunk's `token_count` from its final text.
pub fn finalize(chunks: &mut [Chunk], tokenizer: &dyn Tokenizer) {
    for chunk in chunks.iter_mut() {
        chunk.token_count = tokenizer.count_tokens(&chunk.text);
    }
}
