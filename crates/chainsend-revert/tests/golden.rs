//! Golden fixture tests for chainsend-revert.
//!
//! Each fixture is real-world revert data captured as hex; tests assert the
//! decoded output matches the expected signature and parameters.

use chainsend_revert::{decode_revert, DecodedRevert, ParamValue};

/// `Panic(0x11)` — arithmetic overflow
const PANIC_OVERFLOW_HEX: &str =
    "4e487b710000000000000000000000000000000000000000000000000000000000000011";

/// `Panic(0x32)` — out-of-bounds array access
const PANIC_OOB_HEX: &str =
    "4e487b710000000000000000000000000000000000000000000000000000000000000032";

/// `OwnableUnauthorizedAccount(0xd8da6bf26964af9d7eed9e03e53415d37aa96045)`
/// selector = keccak256("OwnableUnauthorizedAccount(address)")[..4] == 118cdaa7
const OZ_OWNABLE_HEX: &str =
    "118cdaa7000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045";

fn decode_hex(hex_str: &str, errors: &[&str]) -> DecodedRevert {
    let data = hex::decode(hex_str).expect("invalid fixture hex");
    let errors: Vec<String> = errors.iter().map(|s| s.to_string()).collect();
    decode_revert(&data, &errors)
}

#[test]
fn golden_panic_overflow() {
    let decoded = decode_hex(PANIC_OVERFLOW_HEX, &[]);
    assert_eq!(decoded.to_string(), "arithmetic overflow or underflow");
}

#[test]
fn golden_panic_array_oob() {
    let decoded = decode_hex(PANIC_OOB_HEX, &[]);
    assert_eq!(decoded.to_string(), "out-of-bounds array access");
}

#[test]
fn golden_oz_ownable_unauthorized() {
    let decoded = decode_hex(OZ_OWNABLE_HEX, &["OwnableUnauthorizedAccount(address)"]);
    match decoded {
        DecodedRevert::Match { signature, params } => {
            assert_eq!(signature, "OwnableUnauthorizedAccount(address)");
            let params = params.expect("params should decode");
            assert_eq!(
                params,
                vec![ParamValue::Address(
                    "0xd8da6bf26964af9d7eed9e03e53415d37aa96045".into()
                )]
            );
        }
        other => panic!("expected Match, got {other:?}"),
    }
}

#[test]
fn golden_oz_ownable_without_signature_list() {
    // Same data, no signatures supplied — only Panic(uint256) is consulted.
    let decoded = decode_hex(OZ_OWNABLE_HEX, &[]);
    assert_eq!(decoded, DecodedRevert::NotFound);
}

#[test]
fn golden_display_with_params() {
    let decoded = decode_hex(OZ_OWNABLE_HEX, &["OwnableUnauthorizedAccount(address)"]);
    assert_eq!(
        decoded.to_string(),
        "OwnableUnauthorizedAccount(address)(0xd8da6bf26964af9d7eed9e03e53415d37aa96045)"
    );
}
