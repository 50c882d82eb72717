//! Longest-match, left-to-right fragment splitting.

/// A maximal run of input tagged as either matched separator or plain content.
/// Borrows from the input string, no allocation on the splitting hot path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// The fragment's text.
    pub content: &'a str,
    /// Whether this fragment is a matched separator (`true`) or surrounding
    /// content (`false`).
    pub is_separator: bool,
}

/// Split `text` into fragments.
///
/// `separators = None` is the terminal absent-separators mode: one fragment
/// per character, each tagged `is_separator = true`. `separators = Some(&[])`
/// (an empty, but present, list) instead yields a single content fragment
/// covering all of `text`, no separator can ever match an empty set.
///
/// Otherwise, scans left to right; at each position, matches the *longest*
/// separator literal that starts there (ties broken by earlier position in
/// `separators`), emits any preceding content as a content fragment, then
/// the separator as a separator fragment, and continues past it.
///
/// Concatenating every fragment's `content` in order reproduces `text`
/// exactly.
pub fn split_to_fragments<'a>(text: &'a str, separators: Option<&[&str]>) -> Vec<Fragment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }

    let Some(separators) = separators else {
        return split_by_chars(text);
    };

    if separators.is_empty() {
        return vec![Fragment { content: text, is_separator: false }];
    }

    let mut fragments = Vec::new();
    let mut content_start = 0usize;
    let mut pos = 0usize;
    let len = text.len();

    while pos < len {
        if let Some(match_len) = longest_match_at(&text[pos..], separators) {
            if pos > content_start {
                fragments.push(Fragment { content: &text[content_start..pos], is_separator: false });
            }
            fragments.push(Fragment { content: &text[pos..pos + match_len], is_separator: true });
            pos += match_len;
            content_start = pos;
        } else {
            let ch_len = text[pos..].chars().next().map_or(1, char::len_utf8);
            pos += ch_len;
        }
    }

    if content_start < len {
        fragments.push(Fragment { content: &text[content_start..], is_separator: false });
    }

    fragments
}

fn longest_match_at(rest: &str, separators: &[&str]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for sep in separators {
        if sep.is_empty() {
            continue;
        }
        if rest.starts_with(sep) {
            let len = sep.len();
            match best {
                Some(b) if b >= len => {}
                _ => best = Some(len),
            }
        }
    }
    best
}

fn split_by_chars(text: &str) -> Vec<Fragment<'_>> {
    text.char_indices()
        .map(|(start, ch)| Fragment {
            content: &text[start..start + ch.len_utf8()],
            is_separator: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(fragments: &[Fragment<'_>]) -> String {
        fragments.iter().map(|f| f.content).collect()
    }

    #[test]
    fn empty_text_yields_no_fragments() {
        assert!(split_to_fragments("", Some(&["\n\n"])).is_empty());
    }

    #[test]
    fn absent_separators_splits_per_character() {
        let fragments = split_to_fragments("abc", None);
        assert_eq!(fragments.len(), 3);
        assert!(fragments.iter().all(|f| f.is_separator));
        assert_eq!(contents(&fragments), "abc");
    }

    #[test]
    fn no_separator_match_yields_single_content_fragment() {
        let fragments = split_to_fragments("hello world", Some(&["\n\n"]));
        assert_eq!(fragments.len(), 1);
        assert!(!fragments[0].is_separator);
        assert_eq!(fragments[0].content, "hello world");
    }

    #[test]
    fn adjacent_separators_are_not_merged() {
        let fragments = split_to_fragments("\n\n\n\n", Some(&["\n\n"]));
        let seps: Vec<_> = fragments.iter().filter(|f| f.is_separator).collect();
        assert_eq!(seps.len(), 2);
        assert!(seps.iter().all(|f| f.content == "\n\n"));
    }

    #[test]
    fn longest_match_wins_at_same_position() {
        let fragments = split_to_fragments("what???really", Some(&["?", "??", "???"]));
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].content, "what");
        assert!(fragments[1].is_separator);
        assert_eq!(fragments[1].content, "???");
        assert_eq!(fragments[2].content, "really");
    }

    #[test]
    fn leading_and_trailing_separators_yield_no_surrounding_content() {
        let fragments = split_to_fragments("\n\nhello\n\n", Some(&["\n\n"]));
        assert_eq!(fragments.len(), 3);
        assert!(fragments[0].is_separator);
        assert_eq!(fragments[1].content, "hello");
        assert!(fragments[2].is_separator);
    }

    #[test]
    fn lossless_reconstruction_for_arbitrary_text() {
        let samples = [
            "a.\n\nb!!\n\nc\n# Title\nplain",
            "no separators here at all",
            "???...!!!",
            "",
        ];
        let seps = ["\n\n", "???", "!!!", "\n#", "..."];
        for sample in samples {
            let fragments = split_to_fragments(sample, Some(&seps));
            assert_eq!(contents(&fragments), sample);
        }
    }

    #[test]
    fn multibyte_characters_split_on_char_boundaries() {
        let fragments = split_to_fragments("héllo", None);
        assert_eq!(contents(&fragments), "héllo");
    }
}
