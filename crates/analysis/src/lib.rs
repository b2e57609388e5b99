//! textops analysis core.
//!
//! Six independent text-analysis operations behind one request/result
//! contract. Every operation maps an optional input string to a typed value
//! and never fails: absent input degrades to a documented default.
//!
//! ## What we do
//!
//! - Unique word count (whitespace-delimited, case-sensitive)
//! - Shannon entropy over code points, rounded to 3 decimals
//! - Unicode normalization (NFKC, diacritic stripping, lowercasing,
//!   whitespace collapse)
//! - Alphanumeric palindrome detection
//! - Unique and total code point counts
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared state. Every function reads only its
//! argument, so callers may invoke them from any number of threads without
//! coordination.
//!
//! ## Example
//!
//! ```rust
//! use analysis::{Operation, OperationRequest, OperationValue};
//!
//! let request = OperationRequest::new("racecar");
//! let result = Operation::Palindrome.handle(&request);
//!
//! assert_eq!(result.key, "palindrome");
//! assert_eq!(result.value, OperationValue::Flag(true));
//! assert!(!result.cache_hit);
//! ```

mod chars;
mod entropy;
mod error;
mod normalize;
mod operation;
mod palindrome;
mod types;
mod whitespace;
mod words;

pub use crate::chars::{count_chars, count_unique_chars};
pub use crate::entropy::{entropy, round_to_millis};
pub use crate::error::AnalysisError;
pub use crate::normalize::{normalize, strip_diacritics};
pub use crate::operation::Operation;
pub use crate::palindrome::is_palindrome;
pub use crate::types::{OperationRequest, OperationResult, OperationValue};
pub use crate::whitespace::{collapse_whitespace, is_whitespace};
pub use crate::words::count_unique_words;
