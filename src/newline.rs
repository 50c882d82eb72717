//! Newline normalization: CR, LF, CRLF all become LF.

/// Replace every CRLF and lone CR with LF.
///
/// Idempotent: running this twice produces the same output as running it
/// once, since no `\r` survives the first pass.
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}
