//! Error types for rs-linkmeta.
//!
//! This module defines the hard failures of a resolve call. Missing metadata
//! fields are never errors; they are simply absent from the record.

/// Error type for resolve operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL was empty after trimming surrounding whitespace.
    #[error("URL is empty")]
    EmptyUrl,

    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The URL uses a scheme other than `http` or `https`.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Building the client, sending the request or reading the body failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Unsuccessful HTTP status: {0}")]
    Status(u16),

    /// Serializing a record to JSON failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for resolve operations.
pub type Result<T> = std::result::Result<T, Error>;
