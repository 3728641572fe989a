//! Gas price resolution from a layered fee policy.
//!
//! Precedence: explicit total price → caller-supplied base fee → live
//! `eth_gasPrice` with a safety buffer. The final price is base + priority,
//! all in wei. Buffered values always round up.

use chainsend_core::{CallOptions, DecodeMode, DecodedValue, RpcClient, RpcError};

/// Multiplier applied to a live base-fee lookup.
pub const DEFAULT_BASE_FEE_BUFFER: f64 = 1.20;

/// Multiplier applied to a gas-limit estimate.
pub const DEFAULT_GAS_BUFFER: f64 = 1.50;

const WEI_PER_GWEI: u128 = 1_000_000_000;
const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Denomination of a fee amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeUnit {
    Wei,
    Gwei,
    Ether,
}

/// An amount with its denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeAmount {
    pub amount: u128,
    pub unit: FeeUnit,
}

impl FeeAmount {
    pub const fn new(amount: u128, unit: FeeUnit) -> Self {
        Self { amount, unit }
    }

    pub const fn wei(amount: u128) -> Self {
        Self::new(amount, FeeUnit::Wei)
    }

    pub const fn gwei(amount: u128) -> Self {
        Self::new(amount, FeeUnit::Gwei)
    }

    /// Convert to the base unit.
    pub const fn to_wei(self) -> u128 {
        match self.unit {
            FeeUnit::Wei => self.amount,
            FeeUnit::Gwei => self.amount * WEI_PER_GWEI,
            FeeUnit::Ether => self.amount * WEI_PER_ETHER,
        }
    }
}

/// How to arrive at the effective gas price.
#[derive(Debug, Clone)]
pub struct FeePolicy {
    /// Explicit total gas price; short-circuits everything else.
    pub gas_price: Option<FeeAmount>,
    /// Explicit base fee; skips the live lookup.
    pub base_fee: Option<FeeAmount>,
    /// Buffer applied to a live base-fee lookup. Default 1.20.
    pub base_fee_buffer: f64,
    /// Added on top of the base fee. Default 0 gwei.
    pub priority_fee: FeeAmount,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            gas_price: None,
            base_fee: None,
            base_fee_buffer: DEFAULT_BASE_FEE_BUFFER,
            priority_fee: FeeAmount::gwei(0),
        }
    }
}

/// Apply a safety buffer to an estimate, rounding up. Ceiling, never
/// truncation — underpricing is the failure mode being bought off here.
pub fn buffered(value: u128, factor: f64) -> u128 {
    (value as f64 * factor).ceil() as u128
}

/// Resolve the effective gas price in wei.
///
/// Issues at most one live RPC call (`eth_gasPrice`), and only when neither
/// an explicit price nor a base fee was supplied.
pub async fn resolve_gas_price(
    policy: &FeePolicy,
    client: &RpcClient,
    opts: &CallOptions,
) -> Result<u128, RpcError> {
    if let Some(price) = policy.gas_price {
        return Ok(price.to_wei());
    }

    let base = match policy.base_fee {
        Some(fee) => fee.to_wei(),
        None => {
            let current = current_gas_price(client, opts).await?;
            let padded = buffered(current, policy.base_fee_buffer);
            tracing::debug!(current, padded, buffer = policy.base_fee_buffer, "live base fee");
            padded
        }
    };

    Ok(base + policy.priority_fee.to_wei())
}

async fn current_gas_price(client: &RpcClient, opts: &CallOptions) -> Result<u128, RpcError> {
    let mut opts = opts.clone();
    opts.decode = DecodeMode::HexUint;
    match client.call("eth_gasPrice", vec![], &opts).await? {
        DecodedValue::Uint(v) => u128::try_from(v)
            .map_err(|_| RpcError::DecodeMode("gas price exceeds u128".into())),
        other => Err(RpcError::DecodeMode(format!(
            "eth_gasPrice returned unexpected shape: {other:?}"
        ))),
    }
}
