//! Client for the Federal Register documents API.

use serde_json::Value;

use super::{UpstreamClient, UpstreamError};

/// Marker value selecting presidential documents in the upstream `type`
/// condition.
const PRESIDENTIAL_DOCUMENT_TYPE: &str = "PRESDOCU";

/// Client for the presidential-documents API. Requires no credential.
#[derive(Clone)]
pub struct FederalRegisterClient {
    inner: UpstreamClient,
    base_url: String,
}

impl FederalRegisterClient {
    pub fn new(inner: UpstreamClient, base_url: &str) -> Self {
        Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /documents.json` filtered by president and document types.
    ///
    /// `restrict_to_presidential` adds the `conditions[type][]=PRESDOCU`
    /// filter used by the full document listing; the PDF picker endpoint
    /// omits it.
    pub async fn documents(
        &self,
        president_slug: &str,
        document_types: &[String],
        per_page: u32,
        page: u32,
        restrict_to_presidential: bool,
    ) -> Result<Value, UpstreamError> {
        let mut query = vec![
            ("per_page".to_string(), per_page.to_string()),
            ("page".to_string(), page.to_string()),
            (
                "conditions[president][]".to_string(),
                president_slug.to_string(),
            ),
        ];

        if restrict_to_presidential {
            query.push((
                "conditions[type][]".to_string(),
                PRESIDENTIAL_DOCUMENT_TYPE.to_string(),
            ));
        }

        for document_type in document_types {
            query.push((
                "conditions[presidential_document_type][]".to_string(),
                document_type.clone(),
            ));
        }

        let url = format!("{}/documents.json", self.base_url);
        self.inner.get_json(&url, &query).await
    }
}
