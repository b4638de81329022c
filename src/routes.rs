//! Top-level router configuration.
//!
//! # Route Structure (all GET)
//!
//! - `/`                                                     - service banner
//! - `/widgets.json`, `/apps.json`                           - static config passthrough
//! - `/congress/bills`                                       - bill listing (cached)
//! - `/congress/bills/list`                                  - sorted bill numbers (cached)
//! - `/congress/{congress}/bills/{type}/filtered`            - bills by congress + type
//! - `/congress/{congress}/bills/{type}/{number}`            - bill detail (cached)
//! - `/congress/{congress}/bills/{type}/{number}/text`       - text versions (cached)
//! - `/summaries/{congress}/bills/{type}/{number}`           - markdown summary (cached)
//! - `/summary/congress/{congress}/bills/{type}/summaries`   - batch summaries
//! - `/get_bill_html`                                        - raw HTML passthrough
//! - `/daily-congressional-records`, `/daily-congressional-record/{v}/{i}` - WIP passthrough
//! - `/federal-register/presidential-documents`              - document listing (cached)
//! - `/presidential-documents/pdfs`                          - picker label/value list
//! - `/presidential-documents/view`                          - base64 PDF download
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **CORS** - configured origins for the dashboard frontend

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{
    apps_handler, batch_summaries_handler, bill_detail_handler, bill_html_handler,
    bill_numbers_handler, bill_summary_handler, bills_handler, daily_records_handler,
    document_pdfs_handler, filtered_bills_handler, presidential_documents_handler,
    record_issue_handler, root_handler, text_versions_handler, view_document_handler,
    widgets_handler,
};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - origins accepted by the CORS layer; invalid entries
///   are skipped
pub fn app_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/widgets.json", get(widgets_handler))
        .route("/apps.json", get(apps_handler))
        .route("/congress/bills", get(bills_handler))
        .route("/congress/bills/list", get(bill_numbers_handler))
        .route(
            "/congress/{congress}/bills/{bill_type}/filtered",
            get(filtered_bills_handler),
        )
        .route(
            "/congress/{congress}/bills/{bill_type}/{bill_number}",
            get(bill_detail_handler),
        )
        .route(
            "/congress/{congress}/bills/{bill_type}/{bill_number}/text",
            get(text_versions_handler),
        )
        .route(
            "/summaries/{congress}/bills/{bill_type}/{bill_number}",
            get(bill_summary_handler),
        )
        .route(
            "/summary/congress/{congress}/bills/{bill_type}/summaries",
            get(batch_summaries_handler),
        )
        .route("/get_bill_html", get(bill_html_handler))
        .route("/daily-congressional-records", get(daily_records_handler))
        .route(
            "/daily-congressional-record/{volume_number}/{issue_number}",
            get(record_issue_handler),
        )
        .route(
            "/federal-register/presidential-documents",
            get(presidential_documents_handler),
        )
        .route("/presidential-documents/pdfs", get(document_pdfs_handler))
        .route("/presidential-documents/view", get(view_document_handler))
        .with_state(state)
        .layer(trace_layer())
        .layer(cors_layer(allowed_origins))
}

/// Request/response tracing: an `INFO` span per request, response status and
/// latency in milliseconds on completion.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

/// CORS for the dashboard frontend. The API is read-only, so only GET is
/// allowed.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
