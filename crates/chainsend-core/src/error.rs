//! Client-level error types.

use thiserror::Error;

/// Errors surfaced by the envelope codec and transport.
///
/// No variant is ever retried automatically; every failure propagates to the
/// immediate caller as-is.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Network / socket level failure, propagated verbatim.
    #[error("HTTP error: {0}")]
    Transport(String),

    /// The in-flight request exceeded its timeout.
    #[error("request timed out after {ms}ms")]
    Timeout { ms: u64 },

    /// Response unparsable, missing both result and error, or id mismatch.
    #[error("malformed response envelope: {reason}")]
    MalformedEnvelope { reason: String },

    /// A well-formed JSON-RPC error. `message` carries the decoded revert
    /// detail when the node attached revert data.
    #[error("error {code}: {message}")]
    Protocol { code: i64, message: String },

    /// The result was present but failed the requested post-processing.
    #[error("result decode failed: {0}")]
    DecodeMode(String),

    /// Request serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RpcError {
    /// Returns `true` for node-side execution errors (well-formed JSON-RPC
    /// error envelopes).
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol { .. })
    }
}
