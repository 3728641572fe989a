//! The submission pipeline.
//!
//! Strictly sequential: identity → gas price → nonce → draft → (optional)
//! simulation → gas limit → sign → submit. The first failing stage aborts
//! everything after it; no partial transaction is ever submitted.

use alloy_primitives::{Address, U256};
use serde_json::{json, Value};
use thiserror::Error;

use chainsend_core::{CallOptions, DecodeMode, DecodedValue, RpcClient, RpcError};

use crate::builder::{BuildError, TransactionBuilder, TxDraft, TxFields};
use crate::fee::{buffered, resolve_gas_price, FeePolicy, DEFAULT_GAS_BUFFER};
use crate::signer::Signer;

/// One complete submission attempt. Omit a field for its documented default.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub to: Address,
    /// Contract call data; empty for a plain transfer.
    pub data: Vec<u8>,
    pub value: U256,
    /// Gas price policy. Default: live lookup with a 1.20 buffer.
    pub fee: FeePolicy,
    /// Explicit gas limit, used as-is. Required when `verify` is disabled:
    /// estimating gas against a transaction that would revert is itself
    /// likely to fail.
    pub gas_limit: Option<u64>,
    /// Buffer applied to a gas-limit estimate. Default 1.50.
    pub gas_buffer: f64,
    /// Explicit nonce; otherwise `eth_getTransactionCount` at `block`.
    pub nonce: Option<u64>,
    /// Sender override for simulation and estimation context. Default: the
    /// signer's address.
    pub from: Option<Address>,
    /// Simulate with `eth_call` before estimating or signing. Default true.
    pub verify: bool,
    /// Block context for nonce lookup, simulation and estimation.
    pub block: String,
    /// Transport options: headers, timeout, endpoint override, and the known
    /// revert signatures used to decode simulation failures.
    pub options: CallOptions,
}

impl SubmitRequest {
    pub fn new(to: Address, data: Vec<u8>) -> Self {
        Self {
            to,
            data,
            value: U256::ZERO,
            fee: FeePolicy::default(),
            gas_limit: None,
            gas_buffer: DEFAULT_GAS_BUFFER,
            nonce: None,
            from: None,
            verify: true,
            block: "latest".into(),
            options: CallOptions::default(),
        }
    }
}

/// Errors from the submission pipeline. RPC and builder failures are carried
/// through unchanged.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// `verify: false` without an explicit gas limit is a defined failure,
    /// checked before any network traffic.
    #[error("gas_limit is required when verify is disabled")]
    MissingGasLimit,

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Run the full pipeline and return the transaction hash bytes.
pub async fn submit_transaction(
    client: &RpcClient,
    signer: &dyn Signer,
    builder: &dyn TransactionBuilder,
    req: SubmitRequest,
) -> Result<Vec<u8>, SubmitError> {
    if !req.verify && req.gas_limit.is_none() {
        return Err(SubmitError::MissingGasLimit);
    }

    let sender = signer.address();
    let chain_id = signer.chain_id();
    // Simulation/estimation may run under a different `from` context, but
    // the nonce is always the signer's.
    let from = req.from.unwrap_or(sender);
    tracing::debug!(%sender, chain_id, to = %req.to, "starting submission");

    let gas_price = resolve_gas_price(&req.fee, client, &req.options).await?;

    let nonce = match req.nonce {
        Some(nonce) => nonce,
        None => fetch_nonce(client, &req.options, sender, &req.block).await?,
    };
    tracing::debug!(nonce, gas_price, "resolved transaction inputs");

    let mut draft = builder.draft(TxFields {
        to: req.to,
        nonce,
        data: req.data.clone(),
        gas_price,
        value: req.value,
        chain_id,
    })?;

    if req.verify {
        simulate(client, &req, &draft, from).await?;
    }

    let gas_limit = match req.gas_limit {
        Some(limit) => limit,
        None => {
            let estimate = estimate_gas(client, &req, &draft, from).await?;
            let padded = buffered(u128::from(estimate), req.gas_buffer);
            u64::try_from(padded)
                .map_err(|_| RpcError::DecodeMode("buffered gas limit exceeds u64".into()))?
        }
    };
    tracing::debug!(gas_limit, "resolved gas limit");

    draft.gas_limit = Some(gas_limit);
    let signed = builder.finalize(draft, gas_limit, signer)?;

    let raw_hex = format!("0x{}", hex::encode(&signed.raw));
    let mut opts = req.options.clone();
    opts.decode = DecodeMode::Hex;
    let hash = match client
        .call("eth_sendRawTransaction", vec![Value::String(raw_hex)], &opts)
        .await?
    {
        DecodedValue::Bytes(hash) => hash,
        other => {
            return Err(RpcError::DecodeMode(format!(
                "eth_sendRawTransaction returned unexpected shape: {other:?}"
            ))
            .into())
        }
    };

    tracing::info!(tx_hash = %format!("0x{}", hex::encode(&hash)), "transaction submitted");
    Ok(hash)
}

async fn fetch_nonce(
    client: &RpcClient,
    opts: &CallOptions,
    from: Address,
    block: &str,
) -> Result<u64, RpcError> {
    let mut opts = opts.clone();
    opts.decode = DecodeMode::HexUint;
    let params = vec![json!(format!("{from:#x}")), json!(block)];
    match client.call("eth_getTransactionCount", params, &opts).await? {
        DecodedValue::Uint(v) => {
            u64::try_from(v).map_err(|_| RpcError::DecodeMode("nonce exceeds u64".into()))
        }
        other => Err(RpcError::DecodeMode(format!(
            "eth_getTransactionCount returned unexpected shape: {other:?}"
        ))),
    }
}

async fn simulate(
    client: &RpcClient,
    req: &SubmitRequest,
    draft: &TxDraft,
    from: Address,
) -> Result<(), RpcError> {
    let mut opts = req.options.clone();
    opts.decode = DecodeMode::None;
    let params = vec![call_object(from, draft), json!(req.block)];
    client.call("eth_call", params, &opts).await?;
    Ok(())
}

async fn estimate_gas(
    client: &RpcClient,
    req: &SubmitRequest,
    draft: &TxDraft,
    from: Address,
) -> Result<u64, RpcError> {
    let mut opts = req.options.clone();
    opts.decode = DecodeMode::HexUint;
    let params = vec![call_object(from, draft)];
    match client.call("eth_estimateGas", params, &opts).await? {
        DecodedValue::Uint(v) => {
            u64::try_from(v).map_err(|_| RpcError::DecodeMode("gas estimate exceeds u64".into()))
        }
        other => Err(RpcError::DecodeMode(format!(
            "eth_estimateGas returned unexpected shape: {other:?}"
        ))),
    }
}

/// The call object shared by `eth_call` and `eth_estimateGas`.
fn call_object(from: Address, draft: &TxDraft) -> Value {
    let fields = &draft.fields;
    json!({
        "from": format!("{from:#x}"),
        "to": format!("{:#x}", fields.to),
        "gasPrice": format!("0x{:x}", fields.gas_price),
        "value": format!("0x{:x}", fields.value),
        "data": format!("0x{}", hex::encode(&fields.data)),
    })
}
