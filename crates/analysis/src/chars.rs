use fxhash::FxHashSet;

/// Counts distinct code points in the raw text.
///
/// Every scalar value counts, whitespace and punctuation included. Composed
/// and decomposed spellings of the same letter are different code points
/// and are counted separately.
pub fn count_unique_chars(text: Option<&str>) -> usize {
    let Some(text) = text else {
        return 0;
    };

    let chars: FxHashSet<char> = text.chars().collect();
    chars.len()
}

/// Counts every code point in the raw text, repeats included.
pub fn count_chars(text: Option<&str>) -> usize {
    text.map_or(0, |text| text.chars().count())
}
