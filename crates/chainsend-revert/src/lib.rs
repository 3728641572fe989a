//! chainsend-revert — EVM revert error decoder.
//!
//! Given raw revert bytes and a list of human-readable error signatures
//! (e.g. `"InsufficientBalance(address,uint256)"`), identifies the matching
//! custom error by 4-byte selector and decodes its parameters. The fixed
//! signature `Panic(uint256)` is always consulted first, with a built-in
//! table for the standard Solidity panic codes.
//!
//! # Quick Start
//!
//! ```rust
//! use chainsend_revert::decode_revert;
//!
//! let data = hex::decode(
//!     "4e487b710000000000000000000000000000000000000000000000000000000000000011",
//! ).unwrap();
//! let decoded = decode_revert(&data, &[]);
//! assert!(decoded.is_found());
//! println!("{decoded}"); // "arithmetic overflow or underflow"
//! ```

pub mod decoder;
pub mod panic;
pub mod signature;
pub mod types;

pub use decoder::decode_revert;
pub use panic::{panic_phrase, PANIC_SIGNATURE};
pub use signature::{ErrorSignature, SignatureError};
pub use types::{DecodedRevert, ParamValue};
