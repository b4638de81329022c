//! Passthrough handlers for the daily congressional record endpoints.
//!
//! The upstream schema for these is still marked work-in-progress, so the
//! payloads are forwarded as raw JSON, left uncached, and not covered by the
//! stable output records.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::params::{RecordIssueQuery, RecordsQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Default page size for the daily record listing.
const RECORDS_LIMIT: u32 = 100;

/// Returns the daily congressional record listing, unmapped.
///
/// # Endpoint
///
/// `GET /daily-congressional-records`
pub async fn daily_records_handler(
    State(state): State<AppState>,
    Query(params): Query<RecordsQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    params.validate()?;

    let payload = state
        .congress
        .daily_records(params.format(), params.offset(), params.limit(RECORDS_LIMIT))
        .await
        .map_err(|e| AppError::upstream("Error fetching daily congressional records", e))?;

    let records = payload
        .get("dailyCongressionalRecord")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    Ok(Json(records))
}

/// Returns one daily record issue, unmapped.
///
/// # Endpoint
///
/// `GET /daily-congressional-record/{volume_number}/{issue_number}`
pub async fn record_issue_handler(
    State(state): State<AppState>,
    Path((volume_number, issue_number)): Path<(String, String)>,
    Query(params): Query<RecordIssueQuery>,
) -> Result<Json<Value>, AppError> {
    params.validate()?;

    let payload = state
        .congress
        .daily_record_issue(&volume_number, &issue_number, params.format())
        .await
        .map_err(|e| {
            AppError::upstream("Error fetching congressional record by volume and issue", e)
        })?;

    let issue = payload
        .pointer("/issue/fullIssue")
        .cloned()
        .unwrap_or_else(|| json!([]));

    Ok(Json(issue))
}
