//! Revert data decoding against a caller-supplied signature list.
//!
//! Matching is order-sensitive: `Panic(uint256)` is implicitly prepended,
//! then the caller's signatures are tried in list order and the first
//! selector match wins. There is no collision resolution beyond that.

use alloy_core::dyn_abi::{DynSolType, DynSolValue};

use crate::panic::{panic_phrase, PANIC_SIGNATURE};
use crate::signature::ErrorSignature;
use crate::types::{param_from_dyn, DecodedRevert, ParamValue};

/// Decode raw revert bytes against the known signature list.
///
/// Requires at least 4 bytes (the selector); anything shorter is `NotFound`.
/// Malformed signature strings are skipped, never fatal — decoding is
/// best-effort and must not mask the error the payload came from.
pub fn decode_revert(data: &[u8], known_errors: &[String]) -> DecodedRevert {
    if data.len() < 4 {
        return DecodedRevert::NotFound;
    }
    let selector = [data[0], data[1], data[2], data[3]];
    let payload = &data[4..];

    let candidates =
        std::iter::once(PANIC_SIGNATURE).chain(known_errors.iter().map(String::as_str));

    for raw in candidates {
        let sig = match ErrorSignature::parse(raw) {
            Ok(sig) => sig,
            Err(err) => {
                tracing::debug!(signature = raw, error = %err, "skipping malformed error signature");
                continue;
            }
        };
        if sig.selector() != selector {
            continue;
        }
        return decode_match(&sig, payload);
    }

    DecodedRevert::NotFound
}

fn decode_match(sig: &ErrorSignature, payload: &[u8]) -> DecodedRevert {
    let params = decode_params(sig, payload);

    // Standard panic codes override the generic result with a fixed phrase.
    if sig.signature() == PANIC_SIGNATURE {
        if let Some(ParamValue::Uint(code)) = params.as_ref().and_then(|p| p.first()) {
            if let Some(phrase) = panic_phrase(*code) {
                return DecodedRevert::Match {
                    signature: phrase.to_string(),
                    params: None,
                };
            }
        }
    }

    DecodedRevert::Match {
        signature: sig.signature().to_string(),
        params,
    }
}

fn decode_params(sig: &ErrorSignature, payload: &[u8]) -> Option<Vec<ParamValue>> {
    if sig.param_types().is_empty() {
        return Some(Vec::new());
    }
    let tuple = DynSolType::Tuple(sig.param_types().to_vec());
    match tuple.abi_decode_params(payload) {
        Ok(DynSolValue::Tuple(values)) => Some(values.iter().map(param_from_dyn).collect()),
        Ok(single) => Some(vec![param_from_dyn(&single)]),
        Err(err) => {
            tracing::debug!(signature = sig.signature(), error = %err, "parameter decode failed");
            None
        }
    }
}
