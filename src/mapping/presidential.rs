//! Presidential-document mapping.

use serde_json::Value;

use super::{MappingError, records_array, required_string, string_field};
use crate::api::dto::presidential::{DocumentPick, PresidentialDocument};

/// Longest picker label before truncation kicks in.
const LABEL_MAX_CHARS: usize = 50;

/// Maps the `results` array of a Federal Register payload.
///
/// The upstream guarantees the required fields; if one is missing the whole
/// batch fails rather than skipping the record silently.
pub fn map_presidential_documents(
    payload: &Value,
) -> Result<Vec<PresidentialDocument>, MappingError> {
    records_array(payload, "results")
        .iter()
        .map(map_document)
        .collect()
}

fn map_document(record: &Value) -> Result<PresidentialDocument, MappingError> {
    const ENTITY: &str = "presidential document";

    Ok(PresidentialDocument {
        title: required_string(record, ENTITY, "title")?,
        document_type: required_string(record, ENTITY, "type")?,
        document_number: required_string(record, ENTITY, "document_number")?,
        html_url: required_string(record, ENTITY, "html_url")?,
        pdf_url: required_string(record, ENTITY, "pdf_url")?,
        public_inspection_pdf_url: string_field(record, "public_inspection_pdf_url"),
        publication_date: required_string(record, ENTITY, "publication_date")?,
        abstract_text: string_field(record, "abstract"),
        excerpts: string_field(record, "excerpts"),
    })
}

/// Maps the `results` array into picker label/value pairs.
///
/// Labels truncate to 50 characters plus an ellipsis; both fields pass
/// through as `null` when the upstream omits them.
pub fn map_document_picks(payload: &Value) -> Vec<DocumentPick> {
    records_array(payload, "results")
        .iter()
        .map(|record| DocumentPick {
            label: string_field(record, "title").map(truncate_label),
            value: string_field(record, "pdf_url"),
        })
        .collect()
}

fn truncate_label(title: String) -> String {
    if title.chars().count() > LABEL_MAX_CHARS {
        let mut label: String = title.chars().take(LABEL_MAX_CHARS).collect();
        label.push_str("...");
        label
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document_record() -> Value {
        json!({
            "title": "Advancing Biotechnology and Biomanufacturing Innovation",
            "type": "Presidential Document",
            "document_number": "2022-20167",
            "html_url": "https://www.federalregister.gov/d/2022-20167",
            "pdf_url": "https://www.govinfo.gov/content/pkg/FR-2022-09-15.pdf",
            "public_inspection_pdf_url": null,
            "publication_date": "2022-09-15",
            "abstract": "Executive order on biotechnology.",
            "excerpts": null
        })
    }

    #[test]
    fn maps_required_and_optional_fields() {
        let payload = json!({"results": [document_record()]});
        let documents = map_presidential_documents(&payload).unwrap();

        assert_eq!(documents.len(), 1);
        let document = &documents[0];
        assert_eq!(document.document_number, "2022-20167");
        assert_eq!(document.public_inspection_pdf_url, None);
        assert_eq!(
            document.abstract_text.as_deref(),
            Some("Executive order on biotechnology.")
        );
        assert_eq!(document.excerpts, None);
    }

    #[test]
    fn missing_required_field_fails_the_batch() {
        let mut record = document_record();
        record.as_object_mut().unwrap().remove("pdf_url");
        let payload = json!({"results": [document_record(), record]});

        assert_eq!(
            map_presidential_documents(&payload),
            Err(MappingError::MissingField {
                entity: "presidential document",
                field: "pdf_url"
            })
        );
    }

    #[test]
    fn long_titles_truncate_to_fifty_chars_plus_ellipsis() {
        let long_title = "X".repeat(60);
        let payload = json!({"results": [{"title": long_title, "pdf_url": "https://example.gov/a.pdf"}]});

        let picks = map_document_picks(&payload);
        let label = picks[0].label.as_deref().unwrap();
        assert_eq!(label.chars().count(), LABEL_MAX_CHARS + 3);
        assert!(label.ends_with("..."));
        assert_eq!(picks[0].value.as_deref(), Some("https://example.gov/a.pdf"));
    }

    #[test]
    fn fifty_char_titles_are_left_alone() {
        let title = "Y".repeat(50);
        let payload = json!({"results": [{"title": title.clone(), "pdf_url": null}]});

        let picks = map_document_picks(&payload);
        assert_eq!(picks[0].label.as_deref(), Some(title.as_str()));
        assert_eq!(picks[0].value, None);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // 60 two-byte characters; byte slicing at 50 would split a boundary.
        let title = "é".repeat(60);
        let payload = json!({"results": [{"title": title, "pdf_url": null}]});

        let picks = map_document_picks(&payload);
        let label = picks[0].label.as_deref().unwrap();
        assert_eq!(label.chars().count(), LABEL_MAX_CHARS + 3);
    }
}
