//! Output records for the legislative-bills endpoints.
//!
//! Optional fields always serialize as explicit `null` so callers can tell
//! "not present" from "empty"; nothing is skipped during serialization. The
//! records also implement `Deserialize` because the response cache stores
//! them in serialized form.

use serde::{Deserialize, Serialize};

/// A bill as returned by the listing and detail endpoints.
///
/// Every field is optional: the upstream may omit any of them, and a missing
/// value maps to `null` rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub congress: Option<i64>,
    pub latest_action_date: Option<String>,
    pub latest_action_text: Option<String>,
    pub number: Option<String>,
    pub origin_chamber: Option<String>,
    pub origin_chamber_code: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub bill_type: Option<String>,
    pub update_date: Option<String>,
    pub update_date_including_text: Option<String>,
    pub url: Option<String>,
}

/// One bill summary from the batch summaries endpoint.
///
/// The first five fields are required: the upstream guarantees them, and a
/// missing value is a mapping error rather than a `null`. The embedded bill
/// identity fields stay optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSummary {
    pub action_date: String,
    pub action_desc: String,
    /// Raw summary text as delivered by the upstream (HTML fragment).
    pub text: String,
    /// Markdown rendering of `text`; only populated by the per-bill summary
    /// flow, never by the batch listing.
    pub markdown_text: Option<String>,
    pub update_date: String,
    pub version_code: String,
    pub congress: Option<i64>,
    pub number: Option<String>,
    pub origin_chamber: Option<String>,
    pub origin_chamber_code: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub bill_type: Option<String>,
    pub update_date_including_text: Option<String>,
    pub url: Option<String>,
}

/// One rendering of a bill's text as the upstream describes it.
#[derive(Debug, Clone, Deserialize)]
pub struct TextFormat {
    #[serde(rename = "type")]
    pub format_type: Option<String>,
    pub url: Option<String>,
}

/// A dated bundle of [`TextFormat`] entries, as parsed from the upstream
/// text-versions payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TextVersion {
    pub date: Option<String>,
    #[serde(default)]
    pub formats: Vec<TextFormat>,
    #[serde(rename = "type")]
    pub version_type: Option<String>,
}

/// The output record of the text endpoint: one "Formatted Text" rendering
/// per surviving version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextVersionItem {
    /// The upstream version type label (e.g. "Placed on Calendar Senate").
    pub title: Option<String>,
    /// Human-readable description embedding the version's date.
    pub description: String,
    /// URL of the "Formatted Text" rendering.
    pub link: Option<String>,
}
