use std::num::ParseFloatError;

use thiserror::Error;

/// Errors from building vectors out of text or slices
///
/// Numeric edge cases of the vector algebra never produce errors; they fall back to the
/// zero vector instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Missing parentheses around vector components: {input:?}")]
    MissingDelimiters { input: String },
    #[error("Expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },
    #[error("Invalid component at index {index}: {source}")]
    InvalidComponent {
        index: usize,
        #[source]
        source: ParseFloatError,
    },
}

pub type MathResult<T> = Result<T, MathError>;
