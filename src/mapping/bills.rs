//! Bill listing, detail, and bill-number mapping.

use serde_json::Value;

use super::{MappingError, int_field, records_array, string_field};
use crate::api::dto::bills::Bill;

/// Maps one upstream bill record, flattening `latestAction` and renaming the
/// camelCase keys. Every missing field maps to `None`.
///
/// Detail responses arrive wrapped in a `bill` envelope; list records do
/// not. The envelope is unwrapped when present.
pub fn map_bill(record: &Value) -> Bill {
    let record = record.get("bill").unwrap_or(record);
    let latest_action = record.get("latestAction");

    Bill {
        congress: int_field(record, "congress"),
        latest_action_date: latest_action.and_then(|action| string_field(action, "actionDate")),
        latest_action_text: latest_action.and_then(|action| string_field(action, "text")),
        number: string_field(record, "number"),
        origin_chamber: string_field(record, "originChamber"),
        origin_chamber_code: string_field(record, "originChamberCode"),
        title: string_field(record, "title"),
        bill_type: string_field(record, "type"),
        update_date: string_field(record, "updateDate"),
        update_date_including_text: string_field(record, "updateDateIncludingText"),
        url: string_field(record, "url"),
    }
}

/// Maps the `bills` array of a listing payload.
pub fn map_bills(payload: &Value) -> Vec<Bill> {
    records_array(payload, "bills").iter().map(map_bill).collect()
}

/// Extracts bill numbers, sorts them as integers, and serializes them back
/// to decimal strings.
///
/// The two-step is deliberate: `["10", "2", "1"]` must come out as
/// `["1", "2", "10"]`, not in lexicographic order. Records without a number
/// are skipped; a number that cannot be parsed is a mapping error.
pub fn map_bill_numbers(payload: &Value) -> Result<Vec<String>, MappingError> {
    let bills = records_array(payload, "bills");
    let mut numbers = Vec::with_capacity(bills.len());

    for bill in bills {
        let number = match bill.get("number") {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) if s.is_empty() => continue,
            Some(value) => coerce_number(value)?,
        };
        numbers.push(number);
    }

    numbers.sort_unstable();
    Ok(numbers.into_iter().map(|number| number.to_string()).collect())
}

fn coerce_number(value: &Value) -> Result<i64, MappingError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    parsed.ok_or(MappingError::InvalidField {
        entity: "bill",
        field: "number",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_latest_action_and_renames_keys() {
        let record = json!({
            "congress": 117,
            "latestAction": {
                "actionDate": "2022-04-06",
                "text": "Became Public Law No: 117-108."
            },
            "number": "3076",
            "originChamber": "House",
            "originChamberCode": "H",
            "title": "Postal Service Reform Act of 2022",
            "type": "HR",
            "updateDate": "2022-09-29",
            "updateDateIncludingText": "2022-09-29T03:27:05Z",
            "url": "https://api.congress.gov/v3/bill/117/hr/3076?format=json"
        });

        let bill = map_bill(&record);
        assert_eq!(bill.congress, Some(117));
        assert_eq!(bill.latest_action_date.as_deref(), Some("2022-04-06"));
        assert_eq!(
            bill.latest_action_text.as_deref(),
            Some("Became Public Law No: 117-108.")
        );
        assert_eq!(bill.number.as_deref(), Some("3076"));
        assert_eq!(bill.bill_type.as_deref(), Some("HR"));
    }

    #[test]
    fn missing_fields_default_to_absent() {
        let bill = map_bill(&json!({}));
        assert_eq!(bill.congress, None);
        assert_eq!(bill.latest_action_date, None);
        assert_eq!(bill.title, None);
        assert_eq!(bill.url, None);
    }

    #[test]
    fn detail_envelope_is_unwrapped() {
        let payload = json!({
            "bill": { "congress": 118, "number": "42", "title": "A bill" },
            "request": { "format": "json" }
        });

        let bill = map_bill(&payload);
        assert_eq!(bill.congress, Some(118));
        assert_eq!(bill.number.as_deref(), Some("42"));
    }

    #[test]
    fn map_bills_tolerates_missing_array() {
        assert!(map_bills(&json!({})).is_empty());
        assert_eq!(map_bills(&json!({"bills": [{}, {}]})).len(), 2);
    }

    #[test]
    fn numbers_sort_numerically_not_lexicographically() {
        let payload = json!({
            "bills": [
                {"number": "10"},
                {"number": "2"},
                {"number": "1"}
            ]
        });

        assert_eq!(map_bill_numbers(&payload).unwrap(), vec!["1", "2", "10"]);
    }

    #[test]
    fn numbers_accept_numeric_json_and_skip_absent() {
        let payload = json!({
            "bills": [
                {"number": 30},
                {"title": "no number"},
                {"number": null},
                {"number": ""},
                {"number": "4"}
            ]
        });

        assert_eq!(map_bill_numbers(&payload).unwrap(), vec!["4", "30"]);
    }

    #[test]
    fn malformed_number_is_a_mapping_error() {
        let payload = json!({"bills": [{"number": "S-1"}]});
        assert_eq!(
            map_bill_numbers(&payload),
            Err(MappingError::InvalidField {
                entity: "bill",
                field: "number"
            })
        );
    }
}
