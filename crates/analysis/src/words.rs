use fxhash::FxHashSet;

use crate::whitespace::split_words;

/// Counts distinct whitespace-delimited tokens.
///
/// Whitespace is [`is_whitespace`](crate::whitespace::is_whitespace).
///
/// Tokens are compared byte-for-byte: no case folding, no punctuation
/// stripping, no Unicode normalization. Leading, trailing and repeated
/// whitespace never produce empty tokens.
///
/// Absent input counts as zero words.
///
/// ```rust
/// use analysis::count_unique_words;
///
/// assert_eq!(count_unique_words(Some("to be or not to be")), 4);
/// assert_eq!(count_unique_words(Some("Word word")), 2);
/// assert_eq!(count_unique_words(None), 0);
/// ```
pub fn count_unique_words(text: Option<&str>) -> usize {
    let Some(text) = text else {
        return 0;
    };

    let words: FxHashSet<&str> = split_words(text).collect();
    words.len()
}
