//! The two-phase transaction builder protocol.
//!
//! `draft` produces an unsigned draft from resolved fields; the orchestrator
//! then simulates and estimates against it, patches the gas limit, and hands
//! it back through `finalize` for signing. Binary encoding and signature
//! production stay behind this trait.

use alloy_primitives::{Address, U256};
use thiserror::Error;

use crate::signer::Signer;

/// Fields resolved by the orchestrator before drafting. Fixed once built —
/// only the draft's gas limit remains mutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxFields {
    pub to: Address,
    pub nonce: u64,
    pub data: Vec<u8>,
    /// Effective gas price, wei.
    pub gas_price: u128,
    pub value: U256,
    pub chain_id: u64,
}

/// An unsigned draft. `gas_limit` is patched in place by the estimation step
/// before signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxDraft {
    pub fields: TxFields,
    pub gas_limit: Option<u64>,
}

impl TxDraft {
    pub fn new(fields: TxFields) -> Self {
        Self {
            fields,
            gas_limit: None,
        }
    }
}

/// A signed, wire-ready transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    /// Raw signed bytes, ready for `eth_sendRawTransaction` hex encoding.
    pub raw: Vec<u8>,
}

/// Errors raised by a builder implementation.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("transaction encoding failed: {0}")]
    Encoding(String),

    #[error("signing failed: {0}")]
    Signing(String),
}

/// Builds and signs transactions in two phases.
pub trait TransactionBuilder: Send + Sync {
    /// Produce an unsigned draft from the resolved fields.
    fn draft(&self, fields: TxFields) -> Result<TxDraft, BuildError>;

    /// Sign a draft with its resolved gas limit.
    fn finalize(
        &self,
        draft: TxDraft,
        gas_limit: u64,
        signer: &dyn Signer,
    ) -> Result<SignedTransaction, BuildError>;
}
