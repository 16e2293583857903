//! HTTP client module
//!
//! Provides the HTTP client used by remote record sources.
//!
//! # Features
//!
//! - **Automatic Retries**: Timeouts, connection errors, 429 and 5xx responses
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Retry-After**: Honoured on 429 responses

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
