//! The `HttpTransport` trait — the seam to the underlying HTTP stack.
//!
//! Connection handling, TLS, and socket-level concerns all live behind this
//! trait; the codec only posts bytes and reads bytes back.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::RpcError;

/// An HTTP POST capability.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` for use across Tokio tasks.
#[async_trait]
pub trait HttpTransport: Send + Sync + 'static {
    /// POST `body` to `url` and return the raw response body.
    ///
    /// `headers` are merged on top of the protocol defaults
    /// (`Accept` / `Content-Type: application/json`). A timeout expiry is
    /// surfaced as [`RpcError::Timeout`] and never retried here.
    async fn post(
        &self,
        url: &str,
        body: Vec<u8>,
        headers: &[(String, String)],
        timeout: Duration,
    ) -> Result<Vec<u8>, RpcError>;
}
