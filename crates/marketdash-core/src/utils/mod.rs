//! Utility functions for HTML escaping and value formatting.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{escape_html, money, or_dash, CURRENCY, DASH};
