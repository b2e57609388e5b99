//! Whitespace handling shared by word counting and normalization.
//!
//! Whitespace here is Unicode `White_Space` plus the ASCII information
//! separators U+001C..=U+001F (file, group, record, unit), which
//! text-processing callers conventionally treat as spacing too.

/// Returns `true` for characters that delimit words.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Splits on runs of whitespace, skipping empty segments.
pub(crate) fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_whitespace).filter(|word| !word.is_empty())
}

/// Collapses every run of whitespace to one ASCII space and trims both ends.
///
/// ```rust
/// use analysis::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  hello \t\n world  "), "hello world");
/// assert_eq!(collapse_whitespace("a\u{1c}b"), "a b");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if is_whitespace(ch) {
            // Leading whitespace never produces a space.
            pending_space = !collapsed.is_empty();
            continue;
        }
        if pending_space {
            collapsed.push(' ');
            pending_space = false;
        }
        collapsed.push(ch);
    }

    collapsed
}
