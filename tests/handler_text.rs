mod common;

use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

use common::{gateway_with_route, spawn_upstream, test_server, test_state};

#[tokio::test]
async fn text_versions_keep_only_formatted_text() {
    let payload = json!({
        "textVersions": [
            {
                "date": "2022-03-08T05:00:00Z",
                "type": "Placed on Calendar Senate",
                "formats": [
                    {"type": "Formatted Text", "url": "https://www.congress.gov/bill.htm"},
                    {"type": "PDF", "url": "https://www.congress.gov/bill.pdf"}
                ]
            },
            {
                "date": "2022-02-01T05:00:00Z",
                "type": "Engrossed",
                "formats": [
                    {"type": "PDF", "url": "https://www.congress.gov/engrossed.pdf"}
                ]
            }
        ]
    });

    let (server, recorded) = gateway_with_route(
        "/v3/bill/{congress}/{bill_type}/{bill_number}/text",
        payload,
    )
    .await;

    let response = server.get("/congress/117/bills/hr/3076/text").await;
    response.assert_status_ok();

    let versions = response.json::<Value>();
    let list = versions.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "Placed on Calendar Senate");
    assert_eq!(list[0]["link"], "https://www.congress.gov/bill.htm");
    assert_eq!(
        list[0]["description"],
        "Text version of the bill as of 2022-03-08T05:00:00Z"
    );
    assert!(
        !versions.to_string().contains("bill.pdf"),
        "PDF renderings must be dropped"
    );

    // Second call is served from cache.
    server.get("/congress/117/bills/hr/3076/text").await.assert_status_ok();
    assert_eq!(recorded.hits(), 1);
}

#[tokio::test]
async fn bill_html_passes_the_body_through() {
    let upstream = Router::new().route(
        "/page",
        get(|| async { "<html><body>Bill text</body></html>" }),
    );
    let addr = spawn_upstream(upstream).await;
    let server = test_server(test_state(addr));

    let response = server
        .get("/get_bill_html")
        .add_query_param("path", format!("http://{addr}/page"))
        .await;

    response.assert_status_ok();
    let html = response.json::<String>();
    assert!(html.contains("<body>Bill text</body>"));
}

#[tokio::test]
async fn bill_html_upstream_failure_is_a_500() {
    let upstream = Router::new().route(
        "/page",
        get(|| async { (axum::http::StatusCode::NOT_FOUND, "gone") }),
    );
    let addr = spawn_upstream(upstream).await;
    let server = test_server(test_state(addr));

    let response = server
        .get("/get_bill_html")
        .add_query_param("path", format!("http://{addr}/page"))
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Error fetching HTML content")
    );
}
