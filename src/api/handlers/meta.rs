//! Service banner and static configuration passthrough.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::state::AppState;

/// Service banner.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "Info": "Government API" }))
}

/// Serves the widget configuration consumed by the dashboard, verbatim.
///
/// # Endpoint
///
/// `GET /widgets.json`
pub async fn widgets_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    serve_config_file(&state, "widgets.json").await
}

/// Serves the app configuration consumed by the dashboard, verbatim.
///
/// # Endpoint
///
/// `GET /apps.json`
pub async fn apps_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    serve_config_file(&state, "apps.json").await
}

/// Reads a JSON file from the configured assets directory and returns it
/// unchanged.
async fn serve_config_file(state: &AppState, name: &str) -> Result<Json<Value>, AppError> {
    let path = state.assets_dir.join(name);

    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| AppError::Internal(format!("Error reading {name}: {e}")))?;

    let value = serde_json::from_str(&contents)
        .map_err(|e| AppError::Internal(format!("Error parsing {name}: {e}")))?;

    Ok(Json(value))
}
