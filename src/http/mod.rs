//! HTTP transport module
//!
//! Provides the [`Transport`] seam and its reqwest-backed implementation.
//!
//! # Features
//!
//! - **Pluggable Transport**: swap in any `Transport` at runtime (tests, proxies)
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Retries**: Opt-in retries with constant, linear, or exponential backoff

mod client;
mod rate_limit;

pub use client::{
    HttpTransport, HttpTransportConfig, HttpTransportConfigBuilder, Transport, TransportRequest,
    TransportResponse,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
