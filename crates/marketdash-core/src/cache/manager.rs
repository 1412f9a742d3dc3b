use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::storage::Storage;

/// Default time-to-live for cached responses.
pub const DEFAULT_TTL_SECS: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Milliseconds since the Unix epoch at write time
    #[serde(rename = "t")]
    pub timestamp: i64,
    #[serde(rename = "v")]
    pub value: Value,
}

impl CacheEntry {
    pub fn new(value: Value, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now.timestamp_millis(),
            value,
        }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        Duration::milliseconds(now.timestamp_millis() - self.timestamp)
    }

    /// An entry is valid while `now - timestamp <= ttl`.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) > ttl
    }
}

/// TTL cache over a `Storage` backend. Never fails: storage problems read as
/// a miss and failed writes are dropped.
#[derive(Clone)]
pub struct SessionCache {
    store: Arc<dyn Storage>,
    ttl: Duration,
}

impl SessionCache {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self {
            store,
            ttl: Duration::seconds(DEFAULT_TTL_SECS),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached value for `key` if present and not older than `ttl`.
    pub fn read(&self, key: &str, ttl: Duration) -> Option<Value> {
        self.read_at(key, ttl, Utc::now())
    }

    pub fn read_at(&self, key: &str, ttl: Duration, now: DateTime<Utc>) -> Option<Value> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!(cache = key, error = %e, "Failed to read cache entry");
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(cache = key, error = %e, "Failed to parse cache entry");
                return None;
            }
        };

        if entry.is_expired(ttl, now) || entry.value.is_null() {
            return None;
        }
        Some(entry.value)
    }

    /// Store `value` under `key` with the current timestamp, overwriting.
    pub fn write(&self, key: &str, value: &Value) {
        self.write_at(key, value, Utc::now())
    }

    pub fn write_at(&self, key: &str, value: &Value, now: DateTime<Utc>) {
        let entry = CacheEntry::new(value.clone(), now);
        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(cache = key, error = %e, "Failed to serialize cache entry");
                return;
            }
        };
        if let Err(e) = self.store.set_item(key, &raw) {
            debug!(cache = key, error = %e, "Failed to write cache entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};
    use serde_json::json;

    fn cache() -> (Arc<MemoryStore>, SessionCache) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), SessionCache::new(store))
    }

    #[test]
    fn test_read_within_ttl() {
        let (_, cache) = cache();
        let now = Utc::now();
        cache.write_at("wallet", &json!({ "balance": 10 }), now);

        let ttl = Duration::seconds(60);
        assert_eq!(
            cache.read_at("wallet", ttl, now + Duration::seconds(60)),
            Some(json!({ "balance": 10 }))
        );
        assert_eq!(cache.read_at("wallet", ttl, now + Duration::seconds(61)), None);
    }

    #[test]
    fn test_write_overwrites() {
        let (_, cache) = cache();
        cache.write("plan", &json!("basic"));
        cache.write("plan", &json!("pro"));
        assert_eq!(cache.read("plan", cache.ttl()), Some(json!("pro")));
    }

    #[test]
    fn test_missing_and_corrupt_entries_read_as_absent() {
        let (store, cache) = cache();
        assert_eq!(cache.read("nothing", cache.ttl()), None);

        store.set_item("corrupt", "{not json").unwrap();
        assert_eq!(cache.read("corrupt", cache.ttl()), None);
    }

    #[test]
    fn test_cached_null_is_a_miss() {
        let (_, cache) = cache();
        cache.write("wallet", &Value::Null);
        assert_eq!(cache.read("wallet", cache.ttl()), None);
    }

    #[test]
    fn test_entry_uses_compact_wire_shape() {
        let (store, cache) = cache();
        let now = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        cache.write_at("categories", &json!([1]), now);
        let raw = store.get_item("categories").unwrap().unwrap();
        assert_eq!(raw, r#"{"t":1700000000000,"v":[1]}"#);
    }

    #[test]
    fn test_quota_errors_are_swallowed() {
        let store = Arc::new(MemoryStore::with_quota(8));
        let cache = SessionCache::new(store.clone());
        cache.write("featured_projects", &json!({ "results": [] }));
        assert!(store.is_empty());
        assert_eq!(cache.read("featured_projects", cache.ttl()), None);
    }

    struct BrokenStore;

    impl Storage for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Poisoned)
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    #[test]
    fn test_broken_storage_never_fails_caller() {
        let cache = SessionCache::new(Arc::new(BrokenStore));
        cache.write("wallet", &json!(1));
        assert_eq!(cache.read("wallet", cache.ttl()), None);
    }
}
