use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::cache::CacheService;
use crate::upstream::{CongressClient, FederalRegisterClient, UpstreamClient};

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub congress: CongressClient,
    pub federal_register: FederalRegisterClient,
    /// Bare client for the endpoints that fetch caller-supplied URLs.
    pub fetcher: UpstreamClient,
    pub cache: Arc<dyn CacheService>,
    /// TTL applied to every cached response.
    pub cache_ttl: Duration,
    /// Directory the static JSON configuration files are served from.
    pub assets_dir: PathBuf,
}
