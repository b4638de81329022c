//! Handlers for the bill summary endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use crate::api::dto::bills::BillSummary;
use crate::api::dto::params::{BillItemQuery, BillsQuery};
use crate::error::AppError;
use crate::infrastructure::cache::get_or_compute;
use crate::mapping::map_bill_summaries;
use crate::markdown;
use crate::state::AppState;

/// Default page size for the per-bill summaries lookup.
const SUMMARY_LIMIT: u32 = 200;

/// Default page size for the batch summaries listing.
const BATCH_LIMIT: u32 = 100;

/// Returns the markdown-rendered summary for one bill.
///
/// # Endpoint
///
/// `GET /summaries/{congress}/bills/{bill_type}/{bill_number}`
///
/// The response body is a JSON-encoded markdown string. When the upstream
/// has no summaries for the bill, the body is the literal
/// `"No summaries available for this bill."`.
///
/// `override_bill_number` replaces the path's bill number when present.
/// Responses are cached for the configured TTL.
pub async fn bill_summary_handler(
    State(state): State<AppState>,
    Path((congress, bill_type, bill_number)): Path<(u32, String, String)>,
    Query(params): Query<BillItemQuery>,
) -> Result<Json<String>, AppError> {
    params.validate()?;

    let bill_number = params.bill_number(&bill_number);
    let key = format!(
        "summary:{congress}:{bill_type}:{bill_number}:{}:{}:{}",
        params.format(),
        params.offset(),
        params.limit(SUMMARY_LIMIT),
    );

    let rendered = get_or_compute(state.cache.as_ref(), &key, state.cache_ttl, || async {
        let payload = state
            .congress
            .bill_summaries(
                congress,
                &bill_type,
                bill_number,
                params.format(),
                params.offset(),
                params.limit(SUMMARY_LIMIT),
            )
            .await
            .map_err(|e| AppError::upstream("Error fetching bill summaries", e))?;
        Ok(markdown::render_summary(&payload))
    })
    .await?;

    Ok(Json(rendered))
}

/// Returns raw summaries for every bill of a congress and bill type.
///
/// # Endpoint
///
/// `GET /summary/congress/{congress}/bills/{bill_type}/summaries`
///
/// Uncached; every call reaches upstream. Summary text stays raw HTML here -
/// markdown rendering is only done by the per-bill endpoint.
///
/// # Errors
///
/// Returns 500 when the upstream call fails or a summary record is missing
/// one of its required fields.
pub async fn batch_summaries_handler(
    State(state): State<AppState>,
    Path((congress, bill_type)): Path<(u32, String)>,
    Query(params): Query<BillsQuery>,
) -> Result<Json<Vec<BillSummary>>, AppError> {
    params.validate()?;

    let payload = state
        .congress
        .summaries_by_type(
            congress,
            &bill_type,
            params.format(),
            params.offset(),
            params.limit(BATCH_LIMIT),
            params.from_date_time.as_deref(),
            params.to_date_time.as_deref(),
            params.sort(),
        )
        .await
        .map_err(|e| AppError::upstream("Error fetching filtered bill summaries", e))?;

    let summaries = map_bill_summaries(&payload)
        .map_err(|e| AppError::mapping("Error fetching filtered bill summaries", e))?;

    Ok(Json(summaries))
}
