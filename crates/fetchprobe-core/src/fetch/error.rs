//! Fetch error type for failure classification.

use thiserror::Error;

/// Error returned by a single fetch (curl failure, non-success HTTP status,
/// or destination write failure). Kept as an enum so the failure kind can be
/// classified for reporting before converting to anyhow.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, TLS, protocol, etc.).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// Final response carried a non-success status; the destination file was
    /// never created.
    #[error("HTTP {0}")]
    Http(u32),
    /// Destination file could not be created or written (e.g. disk full,
    /// permission denied).
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
