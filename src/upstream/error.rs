//! Uniform error type for upstream calls.

use thiserror::Error;

/// A failed call to an upstream API.
///
/// Non-2xx statuses, connection failures, and timeouts all land here and are
/// treated uniformly by callers: a single failed call is a single reported
/// failure, never retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream responded with a status outside 200-299.
    #[error("upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a usable response (DNS, connect, TLS, or
    /// body read failure).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}
