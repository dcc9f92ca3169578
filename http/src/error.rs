//! Error types for the HTTP driver.

use grove_core::error::GroveError;
use thiserror::Error;

/// Result type for driver operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors surfaced by the driver.
///
/// Transport failures are returned as values so callers can branch on
/// success without depending on transport internals.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Endpoint configuration could not be parsed.
    #[error("Invalid endpoint: {0}")]
    Config(#[from] url::ParseError),

    /// The query could not be rendered.
    #[error("Query error: {0}")]
    Query(#[from] GroveError),

    /// Network failure or non-2xx response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response line that is not valid JSON. Fatal to the whole call.
    #[error("Can't decode response line: {line}")]
    Decode {
        line: String,
        #[source]
        source: serde_json::Error,
    },
}
