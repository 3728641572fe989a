//! Error signature parsing and selector derivation.
//!
//! A signature is the human-readable form `"Name(type1,type2,...)"`. Its
//! 4-byte selector is the first 4 bytes of `keccak256(signature)`.

use alloy_core::dyn_abi::DynSolType;
use thiserror::Error;
use tiny_keccak::{Hasher, Keccak};

/// Errors raised while parsing a signature string.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("malformed signature {signature:?}: {reason}")]
    Malformed { signature: String, reason: String },

    #[error("unknown parameter type {ty:?} in signature {signature:?}")]
    UnknownType { signature: String, ty: String },
}

/// A parsed error signature: name, raw form, and parameter types.
#[derive(Debug, Clone)]
pub struct ErrorSignature {
    signature: String,
    name: String,
    param_types: Vec<DynSolType>,
}

impl ErrorSignature {
    /// Parse a signature string like `"InsufficientBalance(address,uint256)"`.
    pub fn parse(signature: &str) -> Result<Self, SignatureError> {
        let malformed = |reason: &str| SignatureError::Malformed {
            signature: signature.to_string(),
            reason: reason.to_string(),
        };

        let open = signature.find('(').ok_or_else(|| malformed("missing '('"))?;
        if !signature.ends_with(')') {
            return Err(malformed("missing trailing ')'"));
        }
        let name = &signature[..open];
        if name.is_empty() {
            return Err(malformed("empty error name"));
        }
        let inner = &signature[open + 1..signature.len() - 1];

        let mut param_types = Vec::new();
        for ty in split_top_level(inner) {
            let ty = ty.trim();
            if ty.is_empty() {
                return Err(malformed("empty parameter type"));
            }
            let parsed = ty.parse::<DynSolType>().map_err(|_| SignatureError::UnknownType {
                signature: signature.to_string(),
                ty: ty.to_string(),
            })?;
            param_types.push(parsed);
        }

        Ok(Self {
            signature: signature.to_string(),
            name: name.to_string(),
            param_types,
        })
    }

    /// The raw signature string this was parsed from.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The error name (text before the parameter list).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter types in declaration order.
    pub fn param_types(&self) -> &[DynSolType] {
        &self.param_types
    }

    /// First 4 bytes of `keccak256(signature)`.
    pub fn selector(&self) -> [u8; 4] {
        keccak_selector(&self.signature)
    }
}

/// Compute the 4-byte selector of an arbitrary signature string.
pub fn keccak_selector(signature: &str) -> [u8; 4] {
    let mut k = Keccak::v256();
    k.update(signature.as_bytes());
    let mut out = [0u8; 32];
    k.finalize(&mut out);
    [out[0], out[1], out[2], out[3]]
}

/// Split a parameter list on top-level commas only, so tuple types like
/// `(uint256,address)` stay intact.
fn split_top_level(inner: &str) -> Vec<&str> {
    if inner.is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&inner[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_signature() {
        let sig = ErrorSignature::parse("InsufficientBalance(address,uint256)").unwrap();
        assert_eq!(sig.name(), "InsufficientBalance");
        assert_eq!(sig.param_types().len(), 2);
    }

    #[test]
    fn parse_zero_arg_signature() {
        let sig = ErrorSignature::parse("EnforcedPause()").unwrap();
        assert_eq!(sig.name(), "EnforcedPause");
        assert!(sig.param_types().is_empty());
    }

    #[test]
    fn parse_tuple_parameter() {
        let sig = ErrorSignature::parse("OrderFailed((address,uint256),bytes32)").unwrap();
        assert_eq!(sig.param_types().len(), 2);
    }

    #[test]
    fn selector_matches_known_value() {
        // keccak256("Panic(uint256)")[..4] == 0x4e487b71
        let sig = ErrorSignature::parse("Panic(uint256)").unwrap();
        assert_eq!(sig.selector(), [0x4e, 0x48, 0x7b, 0x71]);
    }

    #[test]
    fn selector_of_error_string() {
        // keccak256("Error(string)")[..4] == 0x08c379a0
        assert_eq!(keccak_selector("Error(string)"), [0x08, 0xc3, 0x79, 0xa0]);
    }

    #[test]
    fn parse_rejects_missing_paren() {
        assert!(ErrorSignature::parse("NoParens").is_err());
        assert!(ErrorSignature::parse("Foo(uint256").is_err());
        assert!(ErrorSignature::parse("(uint256)").is_err());
    }

    #[test]
    fn parse_rejects_bad_type() {
        let err = ErrorSignature::parse("Foo(uint257)").unwrap_err();
        assert!(matches!(err, SignatureError::UnknownType { .. }));
    }
}
