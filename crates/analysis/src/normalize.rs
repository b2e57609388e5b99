//! Text normalization pipeline.
//!
//! Stages run in a fixed order; reordering them changes output:
//!
//! 1. NFKC compatibility composition
//! 2. Diacritic stripping (NFD, then drop nonspacing marks `Mn`)
//! 3. Unicode lowercasing
//! 4. Whitespace collapse and trim (see [`crate::whitespace`])
//!
//! The pipeline is idempotent: feeding its output back in returns the same
//! string.

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

use crate::whitespace::collapse_whitespace;

/// Runs the normalization pipeline.
///
/// Returns `None` for absent or empty input, and when nothing survives the
/// pipeline (whitespace-only text, or text made only of nonspacing marks).
///
/// ```rust
/// use analysis::normalize;
///
/// assert_eq!(normalize(Some("  Héllo   Wörld  ")).as_deref(), Some("hello world"));
/// assert_eq!(normalize(Some("   ")), None);
/// assert_eq!(normalize(None), None);
/// ```
pub fn normalize(text: Option<&str>) -> Option<String> {
    let text = text.filter(|text| !text.is_empty())?;

    let composed: String = text.nfkc().collect();
    let stripped = strip_diacritics(&composed);
    // str::to_lowercase, not per-char: final sigma depends on context.
    let lowered = stripped.to_lowercase();
    let collapsed = collapse_whitespace(&lowered);

    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Removes nonspacing marks after canonical decomposition.
///
/// The output stays decomposed. Spacing combining marks (`Mc`) and enclosing
/// marks (`Me`) are kept.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|ch| !ch.is_mark_nonspacing()).collect()
}
