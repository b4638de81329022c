//! Client for the Congress.gov v3 API.

use serde_json::Value;

use super::{UpstreamClient, UpstreamError};

/// Client for the legislative-bills API.
///
/// Every request carries the `api_key` credential as a query parameter. The
/// key is never echoed back to callers and is masked in logs.
#[derive(Clone)]
pub struct CongressClient {
    inner: UpstreamClient,
    base_url: String,
    api_key: String,
}

impl CongressClient {
    pub fn new(inner: UpstreamClient, base_url: &str, api_key: &str) -> Self {
        Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn get(
        &self,
        path: &str,
        mut query: Vec<(String, String)>,
    ) -> Result<Value, UpstreamError> {
        query.insert(0, ("api_key".to_string(), self.api_key.clone()));
        let url = format!("{}/{}", self.base_url, path);
        self.inner.get_json(&url, &query).await
    }

    /// `GET /bill` - bills sorted by date of latest action.
    pub async fn bills(
        &self,
        format: &str,
        offset: u32,
        limit: u32,
        from_date: Option<&str>,
        to_date: Option<&str>,
        sort: &str,
    ) -> Result<Value, UpstreamError> {
        let mut query = vec![
            ("format".to_string(), format.to_string()),
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        push_date(&mut query, "fromDateTime", from_date);
        push_date(&mut query, "toDateTime", to_date);
        query.push(("sort".to_string(), sort.to_string()));

        self.get("bill", query).await
    }

    /// `GET /bill/{congress}/{billType}` - bills for one congress and type.
    pub async fn bills_by_type(
        &self,
        congress: u32,
        bill_type: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Value, UpstreamError> {
        let query = vec![
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];

        self.get(&format!("bill/{congress}/{bill_type}"), query).await
    }

    /// `GET /bill/{congress}/{billType}/{billNumber}` - single bill detail.
    pub async fn bill(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: &str,
    ) -> Result<Value, UpstreamError> {
        self.get(&format!("bill/{congress}/{bill_type}/{bill_number}"), Vec::new())
            .await
    }

    /// `GET /bill/{congress}/{billType}/{billNumber}/summaries` - summaries
    /// for one bill.
    pub async fn bill_summaries(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: &str,
        format: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Value, UpstreamError> {
        let query = paged_query(format, offset, limit);
        self.get(
            &format!("bill/{congress}/{bill_type}/{bill_number}/summaries"),
            query,
        )
        .await
    }

    /// `GET /bill/{congress}/{billType}/{billNumber}/text` - text versions
    /// for one bill.
    pub async fn bill_text_versions(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: &str,
        format: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Value, UpstreamError> {
        let query = paged_query(format, offset, limit);
        self.get(
            &format!("bill/{congress}/{bill_type}/{bill_number}/text"),
            query,
        )
        .await
    }

    /// `GET /summaries/{congress}/{billType}` - batch summaries for every
    /// bill of a congress and type.
    #[allow(clippy::too_many_arguments)]
    pub async fn summaries_by_type(
        &self,
        congress: u32,
        bill_type: &str,
        format: &str,
        offset: u32,
        limit: u32,
        from_date: Option<&str>,
        to_date: Option<&str>,
        sort: &str,
    ) -> Result<Value, UpstreamError> {
        let mut query = paged_query(format, offset, limit);
        push_date(&mut query, "fromDateTime", from_date);
        push_date(&mut query, "toDateTime", to_date);
        query.push(("sort".to_string(), sort.to_string()));

        self.get(&format!("summaries/{congress}/{bill_type}"), query).await
    }

    /// `GET /daily-congressional-record` - unstable upstream listing.
    pub async fn daily_records(
        &self,
        format: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Value, UpstreamError> {
        let query = paged_query(format, offset, limit);
        self.get("daily-congressional-record", query).await
    }

    /// `GET /daily-congressional-record/{volume}/{issue}` - unstable
    /// single-issue lookup.
    pub async fn daily_record_issue(
        &self,
        volume_number: &str,
        issue_number: &str,
        format: &str,
    ) -> Result<Value, UpstreamError> {
        let query = vec![("format".to_string(), format.to_string())];
        self.get(
            &format!("daily-congressional-record/{volume_number}/{issue_number}"),
            query,
        )
        .await
    }
}

fn paged_query(format: &str, offset: u32, limit: u32) -> Vec<(String, String)> {
    vec![
        ("format".to_string(), format.to_string()),
        ("offset".to_string(), offset.to_string()),
        ("limit".to_string(), limit.to_string()),
    ]
}

/// Appends a date parameter, normalizing `YYYY-MM-DD` to the
/// `YYYY-MM-DDT00:00:00Z` form the upstream expects. Absent dates are not
/// transmitted at all.
fn push_date(query: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(date) = value {
        query.push((key.to_string(), format!("{date}T00:00:00Z")));
    }
}
