//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream clients and the response cache, wires the shared
//! state into the router, and runs the Axum server until shutdown.

use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use crate::routes::app_router;
use crate::state::AppState;
use crate::upstream::{CongressClient, FederalRegisterClient, UpstreamClient};

use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - the shared upstream HTTP client and the two service clients
/// - the response cache (in-memory, or `NullCache` when disabled)
/// - the Axum HTTP server
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the bind fails, or the
/// server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let fetcher = UpstreamClient::new();
    let congress = CongressClient::new(
        fetcher.clone(),
        &config.congress_api_host,
        &config.congress_api_key,
    );
    let federal_register =
        FederalRegisterClient::new(fetcher.clone(), &config.federal_register_api_host);

    let cache: Arc<dyn CacheService> = if config.cache_enabled {
        tracing::info!("Cache enabled (in-memory, TTL {}s)", config.cache_ttl_seconds);
        Arc::new(MemoryCache::new())
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let state = AppState {
        congress,
        federal_register,
        fetcher,
        cache,
        cache_ttl: Duration::from_secs(config.cache_ttl_seconds),
        assets_dir: PathBuf::from(&config.assets_dir),
    };

    let app = app_router(state, &config.allowed_origins);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Completes when Ctrl+C is received. In-flight upstream calls run to
/// completion; nothing is persisted, so the cache is simply dropped.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
