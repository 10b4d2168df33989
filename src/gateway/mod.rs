//! HTTP access to the records API.
//!
//! One request per call, no retries. Every request is logged with its
//! method, path, status, elapsed time and a per-request id.

mod client;
pub mod endpoints;
mod error;

pub use client::ApiClient;
pub use error::GatewayError;
