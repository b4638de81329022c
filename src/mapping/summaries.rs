//! Batch bill-summary mapping.

use serde_json::Value;

use super::{MappingError, int_field, records_array, required_string, string_field};
use crate::api::dto::bills::BillSummary;

/// Maps the `summaries` array of a batch payload.
///
/// The summary's own fields are required; the bill identity fields come from
/// the embedded `bill` object and stay optional. `markdown_text` is left
/// absent - the batch listing carries raw text only.
pub fn map_bill_summaries(payload: &Value) -> Result<Vec<BillSummary>, MappingError> {
    records_array(payload, "summaries")
        .iter()
        .map(map_summary)
        .collect()
}

fn map_summary(record: &Value) -> Result<BillSummary, MappingError> {
    let bill = record.get("bill");

    Ok(BillSummary {
        action_date: required_string(record, "summary", "actionDate")?,
        action_desc: required_string(record, "summary", "actionDesc")?,
        text: required_string(record, "summary", "text")?,
        markdown_text: None,
        update_date: required_string(record, "summary", "updateDate")?,
        version_code: required_string(record, "summary", "versionCode")?,
        congress: bill.and_then(|b| int_field(b, "congress")),
        number: bill.and_then(|b| string_field(b, "number")),
        origin_chamber: bill.and_then(|b| string_field(b, "originChamber")),
        origin_chamber_code: bill.and_then(|b| string_field(b, "originChamberCode")),
        title: bill.and_then(|b| string_field(b, "title")),
        bill_type: bill.and_then(|b| string_field(b, "type")),
        update_date_including_text: bill.and_then(|b| string_field(b, "updateDateIncludingText")),
        url: bill.and_then(|b| string_field(b, "url")),
    })
}
