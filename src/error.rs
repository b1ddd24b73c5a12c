//! Error types for ipscope.
//!
//! A fetch fails in exactly two ways, and both collapse to a user-visible
//! message string at the orchestrator boundary. The variant split only
//! matters for logging and tests.

use thiserror::Error;

/// Failure modes of a single identity fetch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure or non-success HTTP status.
    #[error("{0}")]
    Transport(String),

    /// Response body could not be decoded into a [`NetworkIdentity`].
    ///
    /// [`NetworkIdentity`]: crate::models::NetworkIdentity
    #[error("{0}")]
    Decode(String),
}
