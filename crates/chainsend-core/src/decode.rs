//! Result post-processing modes.

use alloy_primitives::U256;
use serde_json::Value;

use crate::error::RpcError;

/// How to interpret a raw JSON-RPC result value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Pass the result through unmodified.
    #[default]
    None,
    /// Interpret the result as `0x`-prefixed hex bytes.
    Hex,
    /// Interpret the result as a hex-encoded big-endian unsigned integer.
    HexUint,
}

/// A result value after post-processing.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Raw(Value),
    Bytes(Vec<u8>),
    Uint(U256),
}

impl DecodedValue {
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn into_uint(self) -> Option<U256> {
        match self {
            Self::Uint(v) => Some(v),
            _ => None,
        }
    }
}

/// Apply a decode mode to a raw result value.
///
/// Decoding failure under `Hex` / `HexUint` is a hard error — a result that
/// cannot be interpreted as requested is never silently passed through.
pub fn decode_result(value: Value, mode: DecodeMode) -> Result<DecodedValue, RpcError> {
    match mode {
        DecodeMode::None => Ok(DecodedValue::Raw(value)),
        DecodeMode::Hex => {
            let s = expect_hex_string(&value)?;
            let bytes = hex::decode(s)
                .map_err(|e| RpcError::DecodeMode(format!("invalid hex result: {e}")))?;
            Ok(DecodedValue::Bytes(bytes))
        }
        DecodeMode::HexUint => {
            let s = expect_hex_string(&value)?;
            if s.is_empty() {
                return Err(RpcError::DecodeMode("empty hex integer".into()));
            }
            let v = U256::from_str_radix(s, 16)
                .map_err(|e| RpcError::DecodeMode(format!("invalid hex integer: {e}")))?;
            Ok(DecodedValue::Uint(v))
        }
    }
}

fn expect_hex_string(value: &Value) -> Result<&str, RpcError> {
    let s = value
        .as_str()
        .ok_or_else(|| RpcError::DecodeMode(format!("expected hex string, got {value}")))?;
    Ok(s.strip_prefix("0x").unwrap_or(s))
}
