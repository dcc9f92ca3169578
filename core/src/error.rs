//! Error types for Grove.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroveError {
    /// Malformed argument to a builder call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Guard for the recursive renderer. Queries own their sub-queries as a
    /// strict tree, so this is unreachable for builder-constructed queries.
    #[error("Query nesting too deep: {depth} levels")]
    NestingTooDeep { depth: usize },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GroveError {
    /// Create an invalid-argument error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type alias for Grove operations.
pub type GroveResult<T> = Result<T, GroveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GroveError::invalid("property expects a mapping");
        assert_eq!(
            err.to_string(),
            "Invalid argument: property expects a mapping"
        );
    }
}
