//! Errors raised while talking to the backend.
//!
//! Only transport and parse failures are errors here. An `error` field in a
//! JSON body is a normal response and is surfaced through the wire types.

use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the body could not be read.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        /// Endpoint path that was called.
        endpoint: &'static str,
        /// Underlying HTTP client error.
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON.
    #[error("invalid response from {endpoint}: {source}")]
    Decode {
        /// Endpoint path that was called.
        endpoint: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The configured base URL cannot be used.
    #[error("invalid base URL {url}: {message}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        message: String,
    },
}

/// Convenience alias for backend calls.
pub type Result<T> = std::result::Result<T, ApiError>;
