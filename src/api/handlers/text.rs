//! Handlers for bill text versions and the raw HTML passthrough.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use crate::api::dto::bills::TextVersionItem;
use crate::api::dto::params::{BillItemQuery, HtmlPathQuery};
use crate::error::AppError;
use crate::infrastructure::cache::get_or_compute;
use crate::mapping::map_text_versions;
use crate::state::AppState;

/// Default page size for the text-versions lookup.
const TEXT_LIMIT: u32 = 100;

/// Returns the "Formatted Text" renderings for one bill.
///
/// # Endpoint
///
/// `GET /congress/{congress}/bills/{bill_type}/{bill_number}/text`
///
/// Versions that offer no "Formatted Text" rendering are dropped from the
/// list. `override_bill_number` replaces the path's bill number when
/// present. Responses are cached for the configured TTL.
pub async fn text_versions_handler(
    State(state): State<AppState>,
    Path((congress, bill_type, bill_number)): Path<(u32, String, String)>,
    Query(params): Query<BillItemQuery>,
) -> Result<Json<Vec<TextVersionItem>>, AppError> {
    params.validate()?;

    let bill_number = params.bill_number(&bill_number);
    let key = format!(
        "text:{congress}:{bill_type}:{bill_number}:{}:{}:{}",
        params.format(),
        params.offset(),
        params.limit(TEXT_LIMIT),
    );

    let versions = get_or_compute(state.cache.as_ref(), &key, state.cache_ttl, || async {
        let payload = state
            .congress
            .bill_text_versions(
                congress,
                &bill_type,
                bill_number,
                params.format(),
                params.offset(),
                params.limit(TEXT_LIMIT),
            )
            .await
            .map_err(|e| AppError::upstream("Error fetching bill text versions", e))?;
        Ok(map_text_versions(&payload))
    })
    .await?;

    Ok(Json(versions))
}

/// Fetches an arbitrary URL server-side and returns its body.
///
/// # Endpoint
///
/// `GET /get_bill_html?path=<url>`
///
/// The response body is the fetched document as a JSON-encoded string.
/// There is no domain allowlist; see the deployment note in the README
/// before exposing this endpoint. Uncached.
pub async fn bill_html_handler(
    State(state): State<AppState>,
    Query(params): Query<HtmlPathQuery>,
) -> Result<Json<String>, AppError> {
    let html = state
        .fetcher
        .get_text(&params.path)
        .await
        .map_err(|e| AppError::upstream("Error fetching HTML content", e))?;

    Ok(Json(html))
}
