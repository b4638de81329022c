//! Application error type and HTTP error responses.
//!
//! Every error body has the shape `{"detail": "<message>"}`. Parameter
//! validation failures reject the request before any upstream call; upstream
//! and mapping failures surface as a 500 with the endpoint context embedded
//! in the message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use validator::ValidationErrors;

use crate::mapping::MappingError;
use crate::upstream::UpstreamError;

#[derive(Debug)]
pub enum AppError {
    /// Request parameters failed validation; upstream was never called.
    Validation(String),
    /// The upstream call failed (non-2xx status, connect error, timeout).
    Upstream {
        context: &'static str,
        source: UpstreamError,
    },
    /// A required field was missing or malformed while mapping the upstream
    /// payload.
    Mapping {
        context: &'static str,
        source: MappingError,
    },
    /// A local failure unrelated to upstream (e.g. unreadable config file).
    Internal(String),
}

impl AppError {
    pub fn upstream(context: &'static str, source: UpstreamError) -> Self {
        Self::Upstream { context, source }
    }

    pub fn mapping(context: &'static str, source: MappingError) -> Self {
        Self::Mapping { context, source }
    }

    fn detail(&self) -> String {
        match self {
            Self::Validation(message) | Self::Internal(message) => message.clone(),
            Self::Upstream { context, source } => format!("{context}: {source}"),
            Self::Mapping { context, source } => format!("{context}: {source}"),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream { .. } | AppError::Mapping { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "detail": self.detail() });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_detail_embeds_context_and_cause() {
        let error = AppError::upstream(
            "Error fetching bills data",
            UpstreamError::Status {
                status: 502,
                message: "bad gateway".to_string(),
            },
        );

        let detail = error.detail();
        assert!(detail.starts_with("Error fetching bills data: "));
        assert!(detail.contains("502"));
    }

    #[test]
    fn mapping_detail_names_the_field() {
        let error = AppError::mapping(
            "Error fetching filtered bill summaries",
            MappingError::MissingField {
                entity: "summary",
                field: "actionDate",
            },
        );

        assert!(error.detail().contains("actionDate"));
    }
}
