//! Error type for the dashboard API client.
//!
//! # Design
//! Two failure classes reach callers: the request never produced a parseable
//! envelope (`Transport`), or the envelope itself reported `success: false`
//! (`Rejected`). `Rejected` displays as the bare message (the server-provided
//! error string when present, otherwise the operation's fixed fallback) so
//! callers can surface it directly.

use thiserror::Error;

/// Errors raised by `DashboardClient` write operations.
///
/// Read operations never raise: lists degrade to empty, lookups to `None`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be completed: network failure, or a response
    /// body that is not a valid envelope.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The request payload could not be encoded as JSON.
    #[error("request encoding failed: {0}")]
    Serialization(String),
}
