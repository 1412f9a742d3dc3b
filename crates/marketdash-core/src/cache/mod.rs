//! Short-lived response cache.
//!
//! This module provides the `SessionCache` that the dashboard consults before
//! fetching a resource. Entries are stored as `{"t": <millis>, "v": <json>}`
//! and considered valid for 60 seconds by default. Expired entries read as
//! absent and are never evicted explicitly.

pub mod manager;

pub use manager::{CacheEntry, SessionCache, DEFAULT_TTL_SECS};
