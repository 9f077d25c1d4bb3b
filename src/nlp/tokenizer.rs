//! Word-level tokenization and whitespace normalization.
//!
//! Tokens are maximal runs of word characters (alphanumeric or underscore),
//! matched case-insensitively by lowercasing at the consumer. No stemming.

/// Whether a character belongs to a word token.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Collapse every run of whitespace into a single space and trim the ends.
///
/// Tabs, newlines, and repeated spaces all normalize to one space.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.trim().chars() {
        if c.is_whitespace() {
            in_space = true;
        } else {
            if in_space {
                out.push(' ');
                in_space = false;
            }
            out.push(c);
        }
    }
    out
}

/// Iterate over word tokens: maximal runs of word characters.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
}

/// Count whitespace-delimited words. Used by the sentence length filter,
/// which deliberately counts raw tokens (punctuation attached) rather than
/// word-character runs.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
