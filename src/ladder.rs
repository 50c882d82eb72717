//! The fixed, five-level separator ladder: strongest structural boundary
//! first, weakest clause-level punctuation last.
//!
//! Each level is a set of separator literals consumed by
//! [`crate::segmentation::fragment::split_to_fragments`]. The ladder itself
//! never changes with configuration; only the packer's recursion depth into
//! it does.

/// Number of fixed ladder levels, before falling back to per-character
/// splitting.
pub const DEPTH: usize = 5;

/// Strongest structural block boundaries.
const EXPLICIT: &[&str] = &[
    ".\n\n", "!\n\n", "!!\n\n", "!!!\n\n", "?\n\n", "??\n\n", "???\n\n",
    "\n\n", "\n---", "\n#####", "\n####", "\n###", "\n##", "\n#",
];

/// Block structures: blockquotes, fences, ordered list items.
const POTENTIAL_LITERALS: &[&str] = &["\n> ", "\n>- ", "\n>* ", "\n```"];

/// Inline structures: tables, links, image references, definition lists.
const WEAK_1: &[&str] = &["| ", " |\n", "-|\n", "[", "![", "\n: "];

/// Sentence-ending punctuation, including mixed interrobangs and unicode.
const WEAK_2_SENTENCE_CHARS: &[char] = &['.', '?', '!'];
const WEAK_2_MIXED: &[&str] = &["?!", "!?", "?!?", "!?!"];
const WEAK_2_UNICODE_PREFIXED: &[&str] = &["⁉", "⁈", "⁇"];
const WEAK_2_UNICODE_STANDALONE: &[&str] = &["… "];
const TRAILING_WHITESPACE: &[char] = &[' ', '\t', '\n'];

/// Clause-level punctuation.
const WEAK_3_CHARS: &[char] = &[';', '}', ')', ']', ':', ','];

/// Separators for ladder `level` (`0..DEPTH`). Levels beyond `DEPTH` are
/// meaningless; callers must switch to the absent-separators per-character
/// fallback instead.
pub fn level_separators(level: usize) -> Vec<String> {
    match level {
        0 => EXPLICIT.iter().map(|s| s.to_string()).collect(),
        1 => potential_separators(),
        2 => WEAK_1.iter().map(|s| s.to_string()).collect(),
        3 => weak_2_separators(),
        4 => weak_3_separators(),
        _ => Vec::new(),
    }
}

fn potential_separators() -> Vec<String> {
    let mut seps: Vec<String> = POTENTIAL_LITERALS.iter().map(|s| s.to_string()).collect();
    for n in 1..=99u32 {
        seps.push(format!("\n{n}. "));
    }
    seps
}

fn weak_2_separators() -> Vec<String> {
    let mut seps = Vec::new();

    for &ch in WEAK_2_SENTENCE_CHARS {
        for run in 1..=4 {
            let base: String = std::iter::repeat(ch).take(run).collect();
            seps.push(base.clone());
            for &ws in TRAILING_WHITESPACE {
                seps.push(format!("{base}{ws}"));
            }
        }
    }

    for mixed in WEAK_2_MIXED {
        seps.push((*mixed).to_string());
        for &ws in TRAILING_WHITESPACE {
            seps.push(format!("{mixed}{ws}"));
        }
    }

    for prefix in WEAK_2_UNICODE_PREFIXED {
        seps.push(format!("{prefix} "));
    }
    seps.extend(WEAK_2_UNICODE_STANDALONE.iter().map(|s| s.to_string()));

    // Longest literals first so equal-length ties never matter in practice,
    // and so humans reading a dump of this list see the strongest matches up top.
    seps.sort_by_key(|s| std::cmp::Reverse(s.len()));
    seps
}

fn weak_3_separators() -> Vec<String> {
    let mut seps = Vec::new();
    for &ch in WEAK_3_CHARS {
        seps.push(ch.to_string());
        for &ws in TRAILING_WHITESPACE {
            seps.push(format!("{ch}{ws}"));
        }
    }
    seps.push("\n".to_string());
    seps
}
