//! chainsend-core — envelope codec and client foundation for ChainSend.
//!
//! # Overview
//!
//! ChainSend is a client-side protocol layer for EVM JSON-RPC nodes. The core
//! crate defines:
//!
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`] — wire types with process-unique
//!   correlation ids
//! - [`ResponseEnvelope`] — closed classification of every response shape
//! - [`DecodeMode`] — optional hex / hex-uint post-processing of results
//! - [`RpcError`] — structured error type
//! - [`HttpTransport`] — the seam to the underlying HTTP stack
//! - [`RpcClient`] — request building, sending, and response decoding

pub mod client;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod request;
pub mod transport;

pub use client::{CallOptions, RpcClient, DEFAULT_TIMEOUT_MS};
pub use decode::{decode_result, DecodeMode, DecodedValue};
pub use envelope::{decode_response, ResponseEnvelope};
pub use error::RpcError;
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId};
pub use transport::HttpTransport;
