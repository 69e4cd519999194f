//! HTTP module
//!
//! The [`Transport`] trait is the single network seam of the crate; the
//! reqwest-backed [`HttpClient`] is its production implementation.
//!
//! The transport only moves bytes: status codes are interpreted by the
//! fetcher, and nothing here retries.

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use transport::{RawResponse, Transport};
