//! Workspace umbrella crate for textops.
//!
//! Re-exports the analysis core so callers depend on one crate, and adds
//! [`analyze`], which runs every operation over the same text.

pub use analysis::{
    AnalysisError, Operation, OperationRequest, OperationResult, OperationValue,
    collapse_whitespace, count_chars, count_unique_chars, count_unique_words, entropy,
    is_palindrome, is_whitespace, normalize, round_to_millis, strip_diacritics,
};

use serde::Serialize;

/// Every operation's value for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub unique_words: usize,
    pub entropy: f64,
    pub normalized: Option<String>,
    pub palindrome: bool,
    pub unique_chars: usize,
    pub char_count: usize,
}

/// Runs all operations over `text`.
///
/// Each value is computed independently; none feeds another.
///
/// ```rust
/// let report = textops::analyze(Some("Never odd or even"));
/// assert!(report.palindrome);
/// assert_eq!(report.unique_words, 4);
/// assert_eq!(report.normalized.as_deref(), Some("never odd or even"));
/// ```
pub fn analyze(text: Option<&str>) -> AnalysisReport {
    AnalysisReport {
        unique_words: count_unique_words(text),
        entropy: entropy(text),
        normalized: normalize(text),
        palindrome: is_palindrome(text),
        unique_chars: count_unique_chars(text),
        char_count: count_chars(text),
    }
}
