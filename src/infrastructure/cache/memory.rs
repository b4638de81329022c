//! In-memory TTL cache implementation.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use super::service::CacheService;

struct Entry {
    value: Value,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Process-local cache with per-entry expiry.
///
/// Entries live exactly their TTL and read as absent afterwards. Expired
/// entries are dropped opportunistically on writes, so the map never grows
/// past the working set plus recently-expired keys. Nothing is persisted;
/// the cache is gone on process restart.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();
        let entries = self.entries.read().await;

        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                debug!("cache HIT: {key}");
                Some(entry.value.clone())
            }
            Some(_) => {
                debug!("cache EXPIRED: {key}");
                None
            }
            None => {
                debug!("cache MISS: {key}");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        entries.retain(|_, entry| !entry.is_expired(now));
        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: now + ttl,
            },
        );
        debug!("cache SET: {key} (TTL: {}s)", ttl.as_secs());
    }
}
