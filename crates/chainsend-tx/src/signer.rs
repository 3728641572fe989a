//! The `Signer` capability trait.
//!
//! Key management and signature production are external concerns; the
//! orchestrator only needs the signer's identity. The actual signing happens
//! inside the [`TransactionBuilder`](crate::TransactionBuilder) when a draft
//! is finalized.

use alloy_primitives::Address;

/// A signing identity.
pub trait Signer: Send + Sync {
    /// The account address transactions are sent from.
    fn address(&self) -> Address;

    /// The chain id signatures are bound to.
    fn chain_id(&self) -> u64;
}
