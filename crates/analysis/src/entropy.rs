//! Shannon entropy over code points.
//!
//! The empirical distribution is built from code point frequencies, so the
//! result is measured in bits per code point. The sum is rounded to three
//! decimal places before it leaves this module; callers comparing entropies
//! compare the rounded values.

use fxhash::FxHashMap;

/// Computes the Shannon entropy of `text` in bits per code point, rounded to
/// three decimal places.
///
/// Absent or empty input yields `0.0`. A text made of a single repeated code
/// point also yields `0.0`; `n` equally frequent distinct code points yield
/// `log2(n)`.
///
/// ```rust
/// use analysis::entropy;
///
/// assert_eq!(entropy(Some("aaaa")), 0.0);
/// assert_eq!(entropy(Some("ab")), 1.0);
/// assert_eq!(entropy(Some("abc")), 1.585);
/// ```
pub fn entropy(text: Option<&str>) -> f64 {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return 0.0,
    };

    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    let mut length = 0usize;
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
        length += 1;
    }

    let length = length as f64;
    let bits = counts.values().fold(0.0_f64, |acc, &count| {
        let p = count as f64 / length;
        acc - p * p.log2()
    });

    round_to_millis(bits)
}

/// Rounds to three decimal places, ties away from zero.
pub fn round_to_millis(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
