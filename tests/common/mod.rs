#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum_test::TestServer;
use serde_json::Value;

use govdata_gateway::infrastructure::cache::MemoryCache;
use govdata_gateway::routes::app_router;
use govdata_gateway::state::AppState;
use govdata_gateway::upstream::{CongressClient, FederalRegisterClient, UpstreamClient};

/// Records every request the stub upstream receives for one route.
#[derive(Default)]
pub struct Recorded {
    hits: AtomicUsize,
    queries: Mutex<Vec<HashMap<String, String>>>,
}

impl Recorded {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<HashMap<String, String>> {
        self.queries.lock().unwrap().last().cloned()
    }
}

/// Builds a stub handler that returns `payload` and records each request.
pub fn canned(
    payload: Value,
    recorded: Arc<Recorded>,
) -> impl Fn(Query<HashMap<String, String>>) -> std::future::Ready<Json<Value>> + Clone {
    move |Query(query): Query<HashMap<String, String>>| {
        recorded.hits.fetch_add(1, Ordering::SeqCst);
        recorded.queries.lock().unwrap().push(query);
        std::future::ready(Json(payload.clone()))
    }
}

/// Serves `router` on an ephemeral local port and returns its address.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Application state wired to the stub upstream, with a fresh in-memory
/// cache and the default one-hour TTL.
pub fn test_state(upstream: SocketAddr) -> AppState {
    let fetcher = UpstreamClient::new();

    AppState {
        congress: CongressClient::new(
            fetcher.clone(),
            &format!("http://{upstream}/v3"),
            "test-key",
        ),
        federal_register: FederalRegisterClient::new(
            fetcher.clone(),
            &format!("http://{upstream}/api/v1"),
        ),
        fetcher,
        cache: Arc::new(MemoryCache::new()),
        cache_ttl: Duration::from_secs(3600),
        assets_dir: PathBuf::from("config"),
    }
}

/// The real application router wrapped in an in-process test server.
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state, &[])).unwrap()
}

/// Stub upstream + gateway in one call, for tests with a single route.
pub async fn gateway_with_route(
    path: &str,
    payload: Value,
) -> (TestServer, Arc<Recorded>) {
    let recorded = Recorded::new();
    let upstream = Router::new().route(path, axum::routing::get(canned(payload, recorded.clone())));
    let addr = spawn_upstream(upstream).await;
    (test_server(test_state(addr)), recorded)
}
