//! HTTP fetch layer for the marketplace backend.
//!
//! This module provides the `ApiClient` fetch wrapper (timeout, bearer token,
//! JSON/form bodies) and the `ResourceSource` trait that the dashboard
//! bootstrapper fetches through, so tests can drive it without a network.

pub mod client;
pub mod error;

pub use client::{ApiClient, Body, RequestOptions, ResourceSource, DEFAULT_TIMEOUT_MS};
pub use error::ApiError;
