//! Handlers for the bill listing and detail endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use crate::api::dto::bills::Bill;
use crate::api::dto::params::{BillsQuery, PageQuery};
use crate::error::AppError;
use crate::infrastructure::cache::get_or_compute;
use crate::mapping::{map_bill, map_bill_numbers, map_bills};
use crate::state::AppState;

/// Default page size for bill listings.
const DEFAULT_LIMIT: u32 = 100;

/// Default page size for the bill-numbers listing.
const NUMBERS_LIMIT: u32 = 250;

/// Returns bills sorted by date of latest action.
///
/// # Endpoint
///
/// `GET /congress/bills`
///
/// # Query Parameters
///
/// - `format` (optional): `json` or `xml` (default: `json`)
/// - `offset` (optional): pagination offset (default: 0)
/// - `limit` (optional): page size, at most 250 (default: 100)
/// - `fromDateTime` / `toDateTime` (optional): `YYYY-MM-DD` update-date range
/// - `sort` (optional): `updateDate+asc` or `updateDate+desc` (default: desc)
///
/// Responses are cached for the configured TTL, keyed by every resolved
/// parameter value.
///
/// # Errors
///
/// Returns 422 on parameter validation failure, 500 when the upstream call
/// fails.
pub async fn bills_handler(
    State(state): State<AppState>,
    Query(params): Query<BillsQuery>,
) -> Result<Json<Vec<Bill>>, AppError> {
    params.validate()?;

    let key = format!(
        "bills:{}:{}:{}:{}:{}:{}",
        params.format(),
        params.offset(),
        params.limit(DEFAULT_LIMIT),
        params.from_date_time.as_deref().unwrap_or(""),
        params.to_date_time.as_deref().unwrap_or(""),
        params.sort(),
    );

    let bills = get_or_compute(state.cache.as_ref(), &key, state.cache_ttl, || async {
        let payload = state
            .congress
            .bills(
                params.format(),
                params.offset(),
                params.limit(DEFAULT_LIMIT),
                params.from_date_time.as_deref(),
                params.to_date_time.as_deref(),
                params.sort(),
            )
            .await
            .map_err(|e| AppError::upstream("Error fetching filtered bills data", e))?;
        Ok(map_bills(&payload))
    })
    .await?;

    Ok(Json(bills))
}

/// Returns bills for one congress and bill type.
///
/// # Endpoint
///
/// `GET /congress/{congress}/bills/{bill_type}/filtered`
///
/// Uncached; every call reaches upstream.
pub async fn filtered_bills_handler(
    State(state): State<AppState>,
    Path((congress, bill_type)): Path<(u32, String)>,
    Query(params): Query<PageQuery>,
) -> Result<Json<Vec<Bill>>, AppError> {
    params.validate()?;

    let payload = state
        .congress
        .bills_by_type(congress, &bill_type, params.offset(), params.limit(DEFAULT_LIMIT))
        .await
        .map_err(|e| AppError::upstream("Error fetching bills data", e))?;

    Ok(Json(map_bills(&payload)))
}

/// Returns the detail record for one bill.
///
/// # Endpoint
///
/// `GET /congress/{congress}/bills/{bill_type}/{bill_number}`
///
/// Responses are cached for the configured TTL.
pub async fn bill_detail_handler(
    State(state): State<AppState>,
    Path((congress, bill_type, bill_number)): Path<(u32, String, String)>,
) -> Result<Json<Bill>, AppError> {
    let key = format!("bill:{congress}:{bill_type}:{bill_number}");

    let bill = get_or_compute(state.cache.as_ref(), &key, state.cache_ttl, || async {
        let payload = state
            .congress
            .bill(congress, &bill_type, &bill_number)
            .await
            .map_err(|e| AppError::upstream("Error fetching bill details", e))?;
        Ok(map_bill(&payload))
    })
    .await?;

    Ok(Json(bill))
}

/// Returns bill numbers as strings, sorted ascending by integer value.
///
/// # Endpoint
///
/// `GET /congress/bills/list`
///
/// Same parameters as `/congress/bills`, with the page size defaulting to
/// the upstream maximum of 250. Responses are cached for the configured
/// TTL.
pub async fn bill_numbers_handler(
    State(state): State<AppState>,
    Query(params): Query<BillsQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    params.validate()?;

    let key = format!(
        "bill-numbers:{}:{}:{}:{}:{}:{}",
        params.format(),
        params.offset(),
        params.limit(NUMBERS_LIMIT),
        params.from_date_time.as_deref().unwrap_or(""),
        params.to_date_time.as_deref().unwrap_or(""),
        params.sort(),
    );

    let numbers = get_or_compute(state.cache.as_ref(), &key, state.cache_ttl, || async {
        let payload = state
            .congress
            .bills(
                params.format(),
                params.offset(),
                params.limit(NUMBERS_LIMIT),
                params.from_date_time.as_deref(),
                params.to_date_time.as_deref(),
                params.sort(),
            )
            .await
            .map_err(|e| AppError::upstream("Error fetching bill numbers", e))?;
        map_bill_numbers(&payload).map_err(|e| AppError::mapping("Error fetching bill numbers", e))
    })
    .await?;

    Ok(Json(numbers))
}
