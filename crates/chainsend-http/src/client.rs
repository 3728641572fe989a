//! HTTP POST transport backed by `reqwest`.

use async_trait::async_trait;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use chainsend_core::{HttpTransport, RpcError};

/// A shared-connection HTTP transport. Cheap to clone; the inner
/// `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .build()
            .expect("failed to build reqwest client");
        Self { http }
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        body: Vec<u8>,
        headers: &[(String, String)],
        timeout: Duration,
    ) -> Result<Vec<u8>, RpcError> {
        let mut req = self
            .http
            .post(url)
            .timeout(timeout)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in headers {
            req = req.header(name.as_str(), value.as_str());
        }

        tracing::debug!(url, body_len = body.len(), timeout_ms = timeout.as_millis() as u64, "POST");

        let resp = req
            .body(body)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RpcError::Transport(format!("HTTP {}: {body}", status.as_u16())));
        }

        let bytes = resp.bytes().await.map_err(|e| classify(e, timeout))?;
        Ok(bytes.to_vec())
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> RpcError {
    if err.is_timeout() {
        RpcError::Timeout {
            ms: timeout.as_millis() as u64,
        }
    } else {
        RpcError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let transport = ReqwestTransport::new();
        // Nothing listens on this port.
        let err = transport
            .post(
                "http://127.0.0.1:1/",
                b"{}".to_vec(),
                &[],
                Duration::from_millis(500),
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err, RpcError::Transport(_) | RpcError::Timeout { .. }),
            "got: {err:?}"
        );
    }
}
