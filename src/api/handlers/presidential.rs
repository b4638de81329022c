//! Handlers for the presidential-documents endpoints.

use axum::Json;
use axum::extract::{Query, State};
use axum_extra::extract::Query as MultiQuery;
use base64::prelude::{BASE64_STANDARD, Engine};
use url::Url;
use validator::Validate;

use crate::api::dto::params::{PdfPickerQuery, PdfViewQuery, PresidentialDocumentsQuery};
use crate::api::dto::presidential::{DocumentPick, PdfDataFormat, PdfPayload, PresidentialDocument};
use crate::error::AppError;
use crate::infrastructure::cache::get_or_compute;
use crate::mapping::{map_document_picks, map_presidential_documents};
use crate::state::AppState;

/// Returns presidential documents from the Federal Register.
///
/// # Endpoint
///
/// `GET /federal-register/presidential-documents`
///
/// # Query Parameters
///
/// - `president` (required): one of the five known slugs
/// - `document_types` (optional): comma-separated type slugs (default:
///   `executive_order`)
/// - `per_page` (optional): at most 100 (default: 20)
/// - `page` (optional): at least 1 (default: 1)
///
/// Responses are cached for the configured TTL.
///
/// # Errors
///
/// Returns 422 on parameter validation failure, 500 when the upstream call
/// fails or a record is missing a required field.
pub async fn presidential_documents_handler(
    State(state): State<AppState>,
    Query(params): Query<PresidentialDocumentsQuery>,
) -> Result<Json<Vec<PresidentialDocument>>, AppError> {
    params.validate()?;

    let document_types = params.document_types();
    let key = format!(
        "presidential-documents:{}:{}:{}:{}",
        params.president.slug(),
        document_types.join(","),
        params.per_page(),
        params.page(),
    );

    let documents = get_or_compute(state.cache.as_ref(), &key, state.cache_ttl, || async {
        let payload = state
            .federal_register
            .documents(
                params.president.slug(),
                &document_types,
                params.per_page(),
                params.page(),
                true,
            )
            .await
            .map_err(|e| AppError::upstream("Error fetching presidential documents", e))?;
        map_presidential_documents(&payload)
            .map_err(|e| AppError::mapping("Error fetching presidential documents", e))
    })
    .await?;

    Ok(Json(documents))
}

/// Returns a label/value list of documents for UI pickers.
///
/// # Endpoint
///
/// `GET /presidential-documents/pdfs`
///
/// `document_types` is a repeated parameter here
/// (`document_types=a&document_types=b`); `president` defaults to
/// `donald-trump`. Uncached.
pub async fn document_pdfs_handler(
    State(state): State<AppState>,
    MultiQuery(params): MultiQuery<PdfPickerQuery>,
) -> Result<Json<Vec<DocumentPick>>, AppError> {
    params.validate()?;

    let document_types: Vec<String> = params
        .document_types
        .iter()
        .map(|document_type| document_type.slug().to_string())
        .collect();

    let payload = state
        .federal_register
        .documents(
            params.president.slug(),
            &document_types,
            params.per_page(),
            params.page(),
            false,
        )
        .await
        .map_err(|e| AppError::upstream("Error fetching presidential documents", e))?;

    Ok(Json(map_document_picks(&payload)))
}

/// Downloads a PDF from an arbitrary URL and returns it base64-encoded.
///
/// # Endpoint
///
/// `GET /presidential-documents/view?url=<pdf-url>`
///
/// The filename is derived from the URL's last path segment with a `.pdf`
/// suffix enforced. Like `/get_bill_html` this fetches caller-supplied URLs
/// with no allowlist; see the deployment note in the README. Uncached.
pub async fn view_document_handler(
    State(state): State<AppState>,
    Query(params): Query<PdfViewQuery>,
) -> Result<Json<PdfPayload>, AppError> {
    let bytes = state
        .fetcher
        .get_bytes(&params.url)
        .await
        .map_err(|e| AppError::upstream("Error downloading presidential document", e))?;

    Ok(Json(PdfPayload {
        data_format: PdfDataFormat {
            data_type: "pdf",
            filename: pdf_filename(&params.url),
        },
        content: BASE64_STANDARD.encode(&bytes),
    }))
}

/// Derives a display filename from the URL's last path segment, forcing a
/// `.pdf` suffix without doubling it.
fn pdf_filename(raw_url: &str) -> String {
    let segment = Url::parse(raw_url)
        .ok()
        .and_then(|url| {
            url.path_segments().and_then(|mut segments| {
                segments
                    .next_back()
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| "document".to_string());

    if segment.ends_with(".pdf") {
        segment
    } else {
        format!("{segment}.pdf")
    }
}
