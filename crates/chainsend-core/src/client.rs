//! `RpcClient` — builds requests, sends them, and decodes responses.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::decode::{decode_result, DecodeMode, DecodedValue};
use crate::envelope::decode_response;
use crate::error::RpcError;
use crate::request::JsonRpcRequest;
use crate::transport::HttpTransport;

/// Default per-call network timeout, milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Per-call options. Omit a field for its documented default.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Extra HTTP headers merged with the protocol defaults.
    pub headers: Vec<(String, String)>,
    /// Result post-processing. Default: pass through.
    pub decode: DecodeMode,
    /// Known revert signatures for error decoding.
    pub errors: Vec<String>,
    /// Per-call timeout override, milliseconds. Default: 30 000.
    pub timeout_ms: Option<u64>,
    /// Target endpoint URL override.
    pub url: Option<String>,
}

impl CallOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }
}

/// JSON-RPC client for a single endpoint.
///
/// Holds no connection state of its own; each call is a complete,
/// self-contained attempt through the [`HttpTransport`].
pub struct RpcClient {
    url: String,
    transport: Arc<dyn HttpTransport>,
}

impl RpcClient {
    pub fn new(url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            url: url.into(),
            transport,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue a JSON-RPC call: build the envelope, POST it, match the response
    /// against the request id, and apply the requested decode mode.
    pub async fn call(
        &self,
        method: &str,
        params: Vec<Value>,
        opts: &CallOptions,
    ) -> Result<DecodedValue, RpcError> {
        let req = JsonRpcRequest::new(method, params);
        let expected_id = req.request_id();
        let body = serde_json::to_vec(&req)?;
        let url = opts.url.as_deref().unwrap_or(&self.url);

        tracing::debug!(method, id = expected_id, url, "sending JSON-RPC request");
        let raw = self
            .transport
            .post(url, body, &opts.headers, opts.timeout())
            .await?;

        let value = decode_response(&raw, expected_id, &opts.errors)?;
        decode_result(value, opts.decode)
    }

    /// Convenience: `net_version`, decoded as the network id string.
    pub async fn net_version(&self, opts: &CallOptions) -> Result<String, RpcError> {
        match self.call("net_version", vec![], opts).await? {
            DecodedValue::Raw(Value::String(s)) => Ok(s),
            other => Err(RpcError::DecodeMode(format!(
                "net_version returned a non-string result: {other:?}"
            ))),
        }
    }
}
