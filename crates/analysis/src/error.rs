use thiserror::Error;

/// Errors surfaced by the analysis crate.
///
/// The operations themselves are total; only resolving an operation by name
/// can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),
}
