//! Decoded revert result types.

use alloy_core::dyn_abi::DynSolValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded parameter value in a matched error's argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ParamValue {
    Uint(u128),
    BigUint(String),
    Int(i128),
    BigInt(String),
    Bool(bool),
    Bytes(Vec<u8>),
    Str(String),
    Address(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint(v) => write!(f, "{v}"),
            Self::BigUint(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::BigInt(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Address(a) => write!(f, "{a}"),
        }
    }
}

pub(crate) fn param_from_dyn(val: &DynSolValue) -> ParamValue {
    match val {
        DynSolValue::Uint(v, _) => match u128::try_from(*v) {
            Ok(small) => ParamValue::Uint(small),
            Err(_) => ParamValue::BigUint(v.to_string()),
        },
        DynSolValue::Int(v, _) => match i128::try_from(*v) {
            Ok(small) => ParamValue::Int(small),
            Err(_) => ParamValue::BigInt(v.to_string()),
        },
        DynSolValue::Bool(b) => ParamValue::Bool(*b),
        DynSolValue::Address(a) => ParamValue::Address(format!("{a:#x}")),
        DynSolValue::String(s) => ParamValue::Str(s.clone()),
        DynSolValue::Bytes(b) => ParamValue::Bytes(b.clone()),
        DynSolValue::FixedBytes(fb, size) => ParamValue::Bytes(fb[..*size].to_vec()),
        _ => ParamValue::Bytes(vec![]),
    }
}

/// The outcome of decoding raw revert bytes against a signature list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodedRevert {
    /// No signature matched the 4-byte selector.
    NotFound,

    /// A signature matched. `params` is `None` when the parameter data could
    /// not be decoded (or a fixed panic phrase replaces it) — the raw payload
    /// stays with the caller in that case.
    Match {
        signature: String,
        params: Option<Vec<ParamValue>>,
    },
}

impl DecodedRevert {
    /// Returns `true` if a signature matched the selector.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

impl fmt::Display for DecodedRevert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "unrecognized revert"),
            Self::Match { signature, params } => {
                write!(f, "{signature}")?;
                match params {
                    Some(values) if !values.is_empty() => {
                        let args: Vec<_> = values.iter().map(|v| v.to_string()).collect();
                        write!(f, "({})", args.join(", "))
                    }
                    _ => Ok(()),
                }
            }
        }
    }
}
