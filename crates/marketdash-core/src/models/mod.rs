//! Data models for marketplace resources.
//!
//! The backend is loosely typed, so every model here is a lenient view:
//! all fields are optional and scalar fields accept numbers, strings or
//! booleans via `Scalar`.
//!
//! - `Job`, `Freelancer`, `Category`, `Review`: list items
//! - `Account`, `Wallet`, `Subscription`, `Referral`: the signed-in user
//! - `AnalyticsStats`, `UnreadCount`: counters
//! - `NotificationPush`: live notification frames

pub mod account;
pub mod marketplace;
pub mod notification;
pub mod scalar;

pub use account::{Account, AnalyticsStats, Referral, Subscription, UnreadCount, Wallet};
pub use marketplace::{Category, Freelancer, Job, Review};
pub use notification::NotificationPush;
pub use scalar::Scalar;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Field deserializer that reads a value of the wrong type as absent, so one
/// odd field never discards the whole record.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Items of a list resource.
///
/// Accepts a bare array or a page object with a `results` array. Items that
/// do not match `T` are skipped. Returns `None` when the value is not a list.
pub fn list_items<T: DeserializeOwned>(value: &Value) -> Option<Vec<T>> {
    let items = raw_items(value)?;
    Some(
        items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
    )
}

/// The first element of a list resource, if it reads as a `T`. Later
/// elements are never considered.
pub fn first_item<T: DeserializeOwned>(value: &Value) -> Option<T> {
    let first = raw_items(value)?.first()?;
    serde_json::from_value(first.clone()).ok()
}

fn raw_items(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => match map.get("results") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// `Some(s)` only for non-empty strings.
pub(crate) fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}
