//! Response envelope classification and decoding.
//!
//! Every response collapses into exactly one of four shapes; handling is
//! exhaustive so no payload falls through untyped.

use serde_json::Value;

use chainsend_revert::{decode_revert, DecodedRevert};

use crate::error::RpcError;
use crate::request::{JsonRpcResponse, RpcId};

/// The four possible shapes of a decoded response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    /// Well-formed success; holds the opaque result value.
    Success(Value),
    /// Well-formed error carrying revert data (hex string).
    ErrorWithData {
        code: i64,
        message: String,
        data: String,
    },
    /// Well-formed error without data.
    ErrorPlain { code: i64, message: String },
    /// Unparsable payload, id mismatch, or neither result nor error.
    Malformed { reason: String },
}

impl ResponseEnvelope {
    /// Classify raw response bytes against the request's correlation id.
    pub fn classify(raw: &[u8], expected_id: u64) -> Self {
        let resp: JsonRpcResponse = match serde_json::from_slice(raw) {
            Ok(resp) => resp,
            Err(err) => {
                return Self::Malformed {
                    reason: format!("invalid envelope: {err}"),
                }
            }
        };

        if resp.id != RpcId::Number(expected_id) {
            return Self::Malformed {
                reason: format!("response id {} does not match request id {expected_id}", resp.id),
            };
        }

        match (resp.result, resp.error) {
            (_, Some(err)) => match err.data {
                Some(Value::String(data)) => Self::ErrorWithData {
                    code: err.code,
                    message: err.message,
                    data,
                },
                Some(other) => Self::ErrorWithData {
                    code: err.code,
                    message: err.message,
                    data: other.to_string(),
                },
                None => Self::ErrorPlain {
                    code: err.code,
                    message: err.message,
                },
            },
            (Some(result), None) => Self::Success(result),
            (None, None) => Self::Malformed {
                reason: "envelope has neither result nor error".into(),
            },
        }
    }
}

/// Decode a raw response against the expected id and known error signatures.
///
/// Success envelopes return the result value unmodified. Error envelopes
/// become [`RpcError::Protocol`] with a human-readable message; when revert
/// data is present it is decoded best-effort — a decode failure degrades the
/// detail to raw hex, it never masks the protocol error itself.
pub fn decode_response(
    raw: &[u8],
    expected_id: u64,
    known_errors: &[String],
) -> Result<Value, RpcError> {
    match ResponseEnvelope::classify(raw, expected_id) {
        ResponseEnvelope::Success(value) => Ok(value),
        ResponseEnvelope::ErrorPlain { code, message } => Err(RpcError::Protocol { code, message }),
        ResponseEnvelope::ErrorWithData { code, message, data } => Err(RpcError::Protocol {
            code,
            message: format!("{message} ({})", render_revert(&data, known_errors)),
        }),
        ResponseEnvelope::Malformed { reason } => Err(RpcError::MalformedEnvelope { reason }),
    }
}

fn render_revert(data: &str, known_errors: &[String]) -> String {
    let stripped = data.strip_prefix("0x").unwrap_or(data);
    match hex::decode(stripped) {
        Ok(bytes) => match decode_revert(&bytes, known_errors) {
            decoded @ DecodedRevert::Match { .. } => decoded.to_string(),
            DecodedRevert::NotFound => format!("0x{stripped}"),
        },
        // Not hex at all — surface the payload verbatim.
        Err(_) => data.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::JsonRpcRequest;

    fn success_body(id: u64, result: &str) -> Vec<u8> {
        format!(r#"{{"jsonrpc":"2.0","result":"{result}","id":{id}}}"#).into_bytes()
    }

    #[test]
    fn round_trip_success_returns_result_unchanged() {
        let req = JsonRpcRequest::new("eth_blockNumber", vec![]);
        let raw = success_body(req.request_id(), "0x12345");
        let value = decode_response(&raw, req.request_id(), &[]).unwrap();
        assert_eq!(value, Value::String("0x12345".into()));
    }

    #[test]
    fn mismatched_id_is_malformed() {
        let raw = success_body(999, "0x1");
        let err = decode_response(&raw, 1000, &[]).unwrap_err();
        assert!(matches!(err, RpcError::MalformedEnvelope { .. }));
    }

    #[test]
    fn garbage_is_malformed() {
        let err = decode_response(b"not json", 1, &[]).unwrap_err();
        assert!(matches!(err, RpcError::MalformedEnvelope { .. }));
    }

    #[test]
    fn missing_result_and_error_is_malformed() {
        let raw = br#"{"jsonrpc":"2.0","id":1}"#;
        let err = decode_response(raw, 1, &[]).unwrap_err();
        assert!(matches!(err, RpcError::MalformedEnvelope { .. }));
    }

    #[test]
    fn plain_error_formats_code_and_message() {
        let raw =
            br#"{"jsonrpc":"2.0","error":{"code":-32000,"message":"nonce too low"},"id":4}"#;
        let err = decode_response(raw, 4, &[]).unwrap_err();
        assert_eq!(err.to_string(), "error -32000: nonce too low");
    }

    #[test]
    fn error_with_panic_data_decodes_phrase() {
        let raw = br#"{"jsonrpc":"2.0","error":{"code":3,"message":"execution reverted","data":"0x4e487b710000000000000000000000000000000000000000000000000000000000000001"},"id":2}"#;
        let err = decode_response(raw, 2, &[]).unwrap_err();
        assert_eq!(err.to_string(), "error 3: execution reverted (assertion failure)");
    }

    #[test]
    fn error_with_unknown_selector_falls_back_to_raw_hex() {
        let raw = br#"{"jsonrpc":"2.0","error":{"code":3,"message":"execution reverted","data":"0xdeadbeef01"},"id":2}"#;
        let err = decode_response(raw, 2, &[]).unwrap_err();
        assert_eq!(err.to_string(), "error 3: execution reverted (0xdeadbeef01)");
    }

    #[test]
    fn error_with_invalid_hex_surfaces_payload() {
        let raw = br#"{"jsonrpc":"2.0","error":{"code":3,"message":"execution reverted","data":"zzzz"},"id":2}"#;
        let err = decode_response(raw, 2, &[]).unwrap_err();
        assert_eq!(err.to_string(), "error 3: execution reverted (zzzz)");
    }

    #[test]
    fn error_with_known_custom_error_decodes_params() {
        // Transfer(uint256) with value 5
        let sig = "Transfer(uint256)";
        let selector = chainsend_revert::signature::keccak_selector(sig);
        let mut data = hex::encode(selector);
        data.push_str(&"00".repeat(31));
        data.push_str("05");
        let raw = format!(
            r#"{{"jsonrpc":"2.0","error":{{"code":3,"message":"execution reverted","data":"0x{data}"}},"id":9}}"#
        );
        let err = decode_response(raw.as_bytes(), 9, &[sig.to_string()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "error 3: execution reverted (Transfer(uint256)(5))"
        );
    }
}
