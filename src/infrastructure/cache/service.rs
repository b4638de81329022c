//! Cache service trait and the get-or-compute entry point.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AppError;

/// Trait for the process-local response cache.
///
/// Implementations must be safe to share across in-flight requests. Two
/// requests racing on the same missing key may both reach upstream; the
/// later write wins and no deduplication is attempted.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the stored value for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key` for `ttl`.
    async fn set(&self, key: &str, value: Value, ttl: Duration);
}

/// Returns the cached value for `key`, computing and storing it on a miss.
///
/// A hit deserializes the stored record without touching upstream. Errors
/// from `compute` propagate unchanged and nothing is stored. An entry that
/// no longer decodes (e.g. after a schema change) is treated as a miss.
pub async fn get_or_compute<T, F, Fut>(
    cache: &dyn CacheService,
    key: &str,
    ttl: Duration,
    compute: F,
) -> Result<T, AppError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    if let Some(value) = cache.get(key).await {
        match serde_json::from_value(value) {
            Ok(hit) => {
                debug!("cache hit: {key}");
                return Ok(hit);
            }
            Err(e) => warn!("discarding undecodable cache entry for {key}: {e}"),
        }
    }

    let fresh = compute().await?;
    match serde_json::to_value(&fresh) {
        Ok(value) => cache.set(key, value, ttl).await,
        Err(e) => warn!("not caching {key}: {e}"),
    }

    Ok(fresh)
}
