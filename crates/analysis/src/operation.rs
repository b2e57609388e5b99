use std::fmt;
use std::panic;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chars::{count_chars, count_unique_chars};
use crate::entropy::entropy;
use crate::error::AnalysisError;
use crate::normalize::normalize;
use crate::palindrome::is_palindrome;
use crate::types::{OperationRequest, OperationResult, OperationValue};
use crate::words::count_unique_words;

/// The text-analysis operations a service can expose.
///
/// Serialized (and parsed) by result key; the service-style aliases used in
/// deployment configs are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[serde(alias = "unique-words")]
    UniqueWords,
    Entropy,
    #[serde(rename = "normalized", alias = "normalize", alias = "normalizer")]
    Normalize,
    Palindrome,
    #[serde(alias = "unique-chars")]
    UniqueChars,
    #[serde(alias = "char-count", alias = "charcount")]
    CharCount,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::UniqueWords,
        Operation::Entropy,
        Operation::Normalize,
        Operation::Palindrome,
        Operation::UniqueChars,
        Operation::CharCount,
    ];

    /// Result key reported alongside every value.
    pub const fn key(self) -> &'static str {
        match self {
            Operation::UniqueWords => "unique_words",
            Operation::Entropy => "entropy",
            Operation::Normalize => "normalized",
            Operation::Palindrome => "palindrome",
            Operation::UniqueChars => "unique_chars",
            Operation::CharCount => "char_count",
        }
    }

    /// Value reported when there is no usable text.
    pub fn default_value(self) -> OperationValue {
        match self {
            Operation::UniqueWords | Operation::UniqueChars | Operation::CharCount => {
                OperationValue::Count(0)
            }
            Operation::Entropy => OperationValue::Entropy(0.0),
            Operation::Normalize => OperationValue::Text(None),
            Operation::Palindrome => OperationValue::Flag(false),
        }
    }

    /// Runs the operation on `text`.
    pub fn apply(self, text: Option<&str>) -> OperationValue {
        match self {
            Operation::UniqueWords => OperationValue::Count(count_unique_words(text)),
            Operation::Entropy => OperationValue::Entropy(entropy(text)),
            Operation::Normalize => OperationValue::Text(normalize(text)),
            Operation::Palindrome => OperationValue::Flag(is_palindrome(text)),
            Operation::UniqueChars => OperationValue::Count(count_unique_chars(text)),
            Operation::CharCount => OperationValue::Count(count_chars(text)),
        }
    }

    /// Answers a request. Never fails.
    ///
    /// A panic inside the operation is contained here: it is logged and the
    /// caller receives [`Operation::default_value`] in a well-formed result.
    pub fn handle(self, request: &OperationRequest) -> OperationResult {
        let text = request.text();
        let value = self.run_guarded(|| self.apply(text));

        OperationResult::new(self.key(), value)
    }

    /// Runs `compute`, substituting this operation's default value if it panics.
    pub(crate) fn run_guarded<F>(self, compute: F) -> OperationValue
    where
        F: FnOnce() -> OperationValue + panic::UnwindSafe,
    {
        panic::catch_unwind(compute).unwrap_or_else(|_| {
            tracing::error!(operation = self.key(), "operation panicked, returning default value");
            self.default_value()
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Operation {
    type Err = AnalysisError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "unique_words" | "unique-words" => Ok(Operation::UniqueWords),
            "entropy" => Ok(Operation::Entropy),
            "normalized" | "normalize" | "normalizer" => Ok(Operation::Normalize),
            "palindrome" => Ok(Operation::Palindrome),
            "unique_chars" | "unique-chars" => Ok(Operation::UniqueChars),
            "char_count" | "char-count" | "charcount" => Ok(Operation::CharCount),
            _ => Err(AnalysisError::UnknownOperation(name.to_string())),
        }
    }
}
