//! chainsend-http — `reqwest`-backed [`HttpTransport`] implementation.
//!
//! Deliberately thin: no retry, no circuit breaker, no provider pool. Every
//! call is a single POST with a per-request timeout; failures propagate to
//! the caller unchanged.
//!
//! [`HttpTransport`]: chainsend_core::HttpTransport

pub mod client;

pub use client::ReqwestTransport;
