//! chainsend-tx — fee calculation and transaction submission.
//!
//! This crate sequences the full submission pipeline: identity → gas price →
//! nonce → draft → (optional) simulation → gas-limit estimation → signing →
//! `eth_sendRawTransaction`. Any stage failing short-circuits the rest and
//! returns the first error; no partial transaction is ever submitted.
//!
//! Signing and binary transaction encoding stay behind the [`Signer`] and
//! [`TransactionBuilder`] capability traits.

pub mod builder;
pub mod fee;
pub mod orchestrator;
pub mod signer;

pub use builder::{BuildError, SignedTransaction, TransactionBuilder, TxDraft, TxFields};
pub use fee::{
    buffered, resolve_gas_price, FeeAmount, FeePolicy, FeeUnit, DEFAULT_BASE_FEE_BUFFER,
    DEFAULT_GAS_BUFFER,
};
pub use orchestrator::{submit_transaction, SubmitError, SubmitRequest};
pub use signer::Signer;
