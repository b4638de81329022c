//! Validated query parameters for the gateway endpoints.
//!
//! Every constraint here is checked before any upstream call is made.
//! Defaults are applied through accessor methods so the cache key and the
//! forwarded query always agree on the resolved values.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::{Validate, ValidationError};

use super::presidential::{DocumentType, President};

/// Compiled pattern for the upstream `format` parameter.
static FORMAT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("^(json|xml)$").unwrap());

/// Compiled pattern for the upstream `sort` parameter. The `+` must be
/// percent-encoded by the caller or it decodes as a space.
static SORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^updateDate\+(asc|desc)$").unwrap());

/// Query parameters shared by the bill listing endpoints.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct BillsQuery {
    #[validate(regex(path = "*FORMAT_REGEX", message = "format must be 'json' or 'xml'"))]
    pub format: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(max = 250, message = "limit must be at most 250"))]
    pub limit: Option<u32>,

    #[serde(rename = "fromDateTime")]
    #[validate(custom(function = "validate_date"))]
    pub from_date_time: Option<String>,

    #[serde(rename = "toDateTime")]
    #[validate(custom(function = "validate_date"))]
    pub to_date_time: Option<String>,

    #[validate(regex(
        path = "*SORT_REGEX",
        message = "sort must be 'updateDate+asc' or 'updateDate+desc'"
    ))]
    pub sort: Option<String>,
}

impl BillsQuery {
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or("json")
    }

    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    /// The listing endpoints default to different page sizes, so the default
    /// is supplied at the call site.
    pub fn limit(&self, default: u32) -> u32 {
        self.limit.unwrap_or(default)
    }

    pub fn sort(&self) -> &str {
        self.sort.as_deref().unwrap_or("updateDate+desc")
    }
}

/// Offset/limit pagination for the filtered bill listing.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct PageQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(max = 250, message = "limit must be at most 250"))]
    pub limit: Option<u32>,
}

impl PageQuery {
    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self, default: u32) -> u32 {
        self.limit.unwrap_or(default)
    }
}

/// Query parameters for the per-bill summary and text endpoints.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct BillItemQuery {
    #[validate(regex(path = "*FORMAT_REGEX", message = "format must be 'json' or 'xml'"))]
    pub format: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(max = 250, message = "limit must be at most 250"))]
    pub limit: Option<u32>,

    /// Replaces the path's bill number when present.
    pub override_bill_number: Option<String>,
}

impl BillItemQuery {
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or("json")
    }

    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self, default: u32) -> u32 {
        self.limit.unwrap_or(default)
    }

    /// The bill number the upstream call should use.
    pub fn bill_number<'a>(&'a self, path_number: &'a str) -> &'a str {
        self.override_bill_number.as_deref().unwrap_or(path_number)
    }
}

/// Query parameters for the daily congressional record listing.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct RecordsQuery {
    #[validate(regex(path = "*FORMAT_REGEX", message = "format must be 'json' or 'xml'"))]
    pub format: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(max = 250, message = "limit must be at most 250"))]
    pub limit: Option<u32>,
}

impl RecordsQuery {
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or("json")
    }

    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self, default: u32) -> u32 {
        self.limit.unwrap_or(default)
    }
}

/// Query parameters for the single daily-record issue lookup.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordIssueQuery {
    #[validate(regex(path = "*FORMAT_REGEX", message = "format must be 'json' or 'xml'"))]
    pub format: Option<String>,
}

impl RecordIssueQuery {
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or("json")
    }
}

/// Query parameters for the presidential-documents listing.
///
/// `president` is required; `document_types` is a comma-separated slug list
/// validated against the closed [`DocumentType`] set.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct PresidentialDocumentsQuery {
    pub president: President,

    #[validate(custom(function = "validate_document_types"))]
    pub document_types: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(max = 100, message = "per_page must be at most 100"))]
    pub per_page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
}

impl PresidentialDocumentsQuery {
    /// Slug list forwarded to the upstream conditions, already validated.
    pub fn document_types(&self) -> Vec<String> {
        self.document_types
            .as_deref()
            .unwrap_or("executive_order")
            .split(',')
            .map(|slug| slug.trim().to_string())
            .collect()
    }

    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(20)
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}

/// Query parameters for the PDF picker endpoint.
///
/// `document_types` arrives as a repeated parameter
/// (`document_types=a&document_types=b`), which is why this struct is
/// extracted with `axum_extra::extract::Query`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct PdfPickerQuery {
    #[serde(default)]
    pub president: President,

    #[serde(default = "default_document_types")]
    pub document_types: Vec<DocumentType>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(max = 100, message = "per_page must be at most 100"))]
    pub per_page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
}

impl PdfPickerQuery {
    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(20)
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}

fn default_document_types() -> Vec<DocumentType> {
    vec![DocumentType::ExecutiveOrder]
}

/// Query parameter for the raw HTML passthrough endpoint.
#[derive(Debug, Deserialize)]
pub struct HtmlPathQuery {
    pub path: String,
}

/// Query parameter for the PDF view endpoint.
#[derive(Debug, Deserialize)]
pub struct PdfViewQuery {
    pub url: String,
}

/// Accepts `YYYY-MM-DD`; the upstream client appends the midnight UTC
/// suffix.
fn validate_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("date").with_message("dates must be formatted YYYY-MM-DD".into())
        })
}

/// Every comma-separated entry must name a known document type.
fn validate_document_types(value: &str) -> Result<(), ValidationError> {
    for entry in value.split(',') {
        if DocumentType::from_slug(entry.trim()).is_none() {
            return Err(ValidationError::new("document_types")
                .with_message(format!("unknown document type '{}'", entry.trim()).into()));
        }
    }
    Ok(())
}
