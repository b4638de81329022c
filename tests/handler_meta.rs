mod common;

use axum::Router;
use serde_json::Value;

use common::{test_server, test_state};

async fn server_without_upstream() -> axum_test::TestServer {
    // These endpoints never call upstream; any address will do.
    let addr = common::spawn_upstream(Router::new()).await;
    test_server(test_state(addr))
}

#[tokio::test]
async fn root_returns_the_service_banner() {
    let server = server_without_upstream().await;

    let response = server.get("/").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["Info"], "Government API");
}

#[tokio::test]
async fn widgets_config_is_served_verbatim() {
    let server = server_without_upstream().await;

    let response = server.get("/widgets.json").await;
    response.assert_status_ok();

    let served = response.json::<Value>();
    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string("config/widgets.json").unwrap()).unwrap();
    assert_eq!(served, on_disk);
}

#[tokio::test]
async fn apps_config_is_served_verbatim() {
    let server = server_without_upstream().await;

    let response = server.get("/apps.json").await;
    response.assert_status_ok();

    let served = response.json::<Value>();
    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string("config/apps.json").unwrap()).unwrap();
    assert_eq!(served, on_disk);
}
