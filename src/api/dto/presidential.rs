//! Output records and closed enums for the presidential-documents endpoints.

use serde::{Deserialize, Serialize};

/// The five presidents the Federal Register endpoints accept.
///
/// Values outside this set fail query extraction, so unknown presidents are
/// rejected before any upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum President {
    #[serde(rename = "william-j-clinton")]
    Clinton,
    #[serde(rename = "george-w-bush")]
    Bush,
    #[serde(rename = "barack-obama")]
    Obama,
    #[default]
    #[serde(rename = "donald-trump")]
    Trump,
    #[serde(rename = "joe-biden")]
    Biden,
}

impl President {
    /// The Federal Register slug for this president.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Clinton => "william-j-clinton",
            Self::Bush => "george-w-bush",
            Self::Obama => "barack-obama",
            Self::Trump => "donald-trump",
            Self::Biden => "joe-biden",
        }
    }
}

/// Presidential document categories accepted by the Federal Register API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Determination,
    ExecutiveOrder,
    Memorandum,
    Notice,
    Proclamation,
    PresidentialOrder,
    Other,
}

impl DocumentType {
    /// The Federal Register slug for this document type.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Determination => "determination",
            Self::ExecutiveOrder => "executive_order",
            Self::Memorandum => "memorandum",
            Self::Notice => "notice",
            Self::Proclamation => "proclamation",
            Self::PresidentialOrder => "presidential_order",
            Self::Other => "other",
        }
    }

    /// Parses a slug, returning `None` for anything outside the closed set.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "determination" => Some(Self::Determination),
            "executive_order" => Some(Self::ExecutiveOrder),
            "memorandum" => Some(Self::Memorandum),
            "notice" => Some(Self::Notice),
            "proclamation" => Some(Self::Proclamation),
            "presidential_order" => Some(Self::PresidentialOrder),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A presidential document as returned by the listing endpoint.
///
/// The upstream guarantees the non-optional fields; a missing one fails the
/// whole batch during mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresidentialDocument {
    pub title: String,
    #[serde(rename = "type")]
    pub document_type: String,
    pub document_number: String,
    pub html_url: String,
    pub pdf_url: String,
    pub public_inspection_pdf_url: Option<String>,
    pub publication_date: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub excerpts: Option<String>,
}

/// Label/value pair for UI document pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPick {
    /// Document title truncated to 50 characters.
    pub label: Option<String>,
    /// The document's PDF URL.
    pub value: Option<String>,
}

/// Base64 PDF payload for the document viewer.
#[derive(Debug, Serialize)]
pub struct PdfPayload {
    pub data_format: PdfDataFormat,
    /// Base64-encoded PDF bytes.
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PdfDataFormat {
    pub data_type: &'static str,
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn president_slugs_round_trip_through_serde() {
        for president in [
            President::Clinton,
            President::Bush,
            President::Obama,
            President::Trump,
            President::Biden,
        ] {
            let value = serde_json::to_value(president).unwrap();
            assert_eq!(value, president.slug());
            let back: President = serde_json::from_value(value).unwrap();
            assert_eq!(back, president);
        }
    }

    #[test]
    fn unknown_president_slug_is_rejected() {
        let result: Result<President, _> = serde_json::from_str("\"abraham-lincoln\"");
        assert!(result.is_err());
    }

    #[test]
    fn document_type_from_slug_is_closed() {
        assert_eq!(
            DocumentType::from_slug("executive_order"),
            Some(DocumentType::ExecutiveOrder)
        );
        assert_eq!(DocumentType::from_slug("presidential_order").unwrap().slug(), "presidential_order");
        assert_eq!(DocumentType::from_slug("tweet"), None);
        assert_eq!(DocumentType::from_slug(""), None);
    }

    #[test]
    fn abstract_serializes_under_its_wire_name() {
        let document = PresidentialDocument {
            title: "Executive Order 14000".to_string(),
            document_type: "Presidential Document".to_string(),
            document_number: "2021-01753".to_string(),
            html_url: "https://www.federalregister.gov/d/2021-01753".to_string(),
            pdf_url: "https://www.govinfo.gov/content/pkg/FR-2021-01-26.pdf".to_string(),
            public_inspection_pdf_url: None,
            publication_date: "2021-01-26".to_string(),
            abstract_text: Some("Supporting educational opportunity.".to_string()),
            excerpts: None,
        };

        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["abstract"], "Supporting educational opportunity.");
        assert_eq!(value["type"], "Presidential Document");
        assert!(value["excerpts"].is_null());
    }
}
