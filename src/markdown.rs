//! Markdown rendering for bill summaries.

use serde_json::Value;

/// Literal returned when a bill has no summaries.
pub const NO_SUMMARIES: &str = "No summaries available for this bill.";

/// Placeholder for header fields the upstream omitted.
const MISSING: &str = "N/A";

/// Renders the first summary of a bill as a markdown document.
///
/// Only the first entry of the upstream list is used; additional summaries
/// are discarded. The HTML `text` field is converted to markdown without
/// line re-flow, and
/// every double quote in the converted text becomes a single quote - the
/// downstream renderer chokes on double quotes inside markdown.
pub fn render_summary(payload: &Value) -> String {
    let summaries = payload
        .get("summaries")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let Some(summary) = summaries.first() else {
        return NO_SUMMARIES.to_string();
    };

    let html = summary.get("text").and_then(Value::as_str).unwrap_or("");
    let markdown_text = html2md::parse_html(html).replace('"', "'");

    format!(
        "# Bill Summary\n\
         \n\
         **Action Date:** {action_date}  \n\
         \n\
         **Action:** {action_desc}  \n\
         **Last Updated:** {update_date}  \n\
         **Version:** {version_code}  \n\
         \n\
         ## Summary Text\n\
         \n\
         {markdown_text}\n",
        action_date = display_field(summary, "actionDate"),
        action_desc = display_field(summary, "actionDesc"),
        update_date = display_field(summary, "updateDate"),
        version_code = display_field(summary, "versionCode"),
    )
}

/// Header fields render as-is when present, `N/A` when absent.
fn display_field(summary: &Value, key: &str) -> String {
    match summary.get(key) {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
