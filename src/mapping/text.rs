//! Text-version filtering and mapping.

use serde_json::Value;

use crate::api::dto::bills::{TextVersion, TextVersionItem};

/// The only rendering type this gateway surfaces. The upstream also offers
/// "PDF" and "Formatted XML", which the file viewer cannot display.
const FORMATTED_TEXT: &str = "Formatted Text";

/// Keeps one entry per version that offers a "Formatted Text" rendering.
///
/// Versions without such a rendering are dropped entirely; other format
/// entries of a surviving version are discarded.
pub fn map_text_versions(payload: &Value) -> Vec<TextVersionItem> {
    let versions: Vec<TextVersion> = payload
        .get("textVersions")
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default();

    let mut items = Vec::new();
    for version in &versions {
        for format in &version.formats {
            if format.format_type.as_deref() != Some(FORMATTED_TEXT) {
                continue;
            }
            items.push(TextVersionItem {
                title: version.version_type.clone(),
                description: format!(
                    "Text version of the bill as of {}",
                    version.date.as_deref().unwrap_or("unknown")
                ),
                link: format.url.clone(),
            });
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_only_the_formatted_text_rendering() {
        let payload = json!({
            "textVersions": [{
                "date": "2022-03-08T05:00:00Z",
                "type": "Placed on Calendar Senate",
                "formats": [
                    {"type": "Formatted Text", "url": "https://www.congress.gov/bill.htm"},
                    {"type": "PDF", "url": "https://www.congress.gov/bill.pdf"},
                    {"type": "Formatted XML", "url": "https://www.congress.gov/bill.xml"}
                ]
            }]
        });

        let items = map_text_versions(&payload);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link.as_deref(), Some("https://www.congress.gov/bill.htm"));
        assert_eq!(items[0].title.as_deref(), Some("Placed on Calendar Senate"));
        assert_eq!(
            items[0].description,
            "Text version of the bill as of 2022-03-08T05:00:00Z"
        );
    }

    #[test]
    fn versions_without_formatted_text_are_dropped() {
        let payload = json!({
            "textVersions": [
                {
                    "date": "2022-03-08",
                    "type": "Engrossed",
                    "formats": [{"type": "PDF", "url": "https://www.congress.gov/a.pdf"}]
                },
                {
                    "date": "2022-04-01",
                    "type": "Enrolled",
                    "formats": [{"type": "Formatted Text", "url": "https://www.congress.gov/b.htm"}]
                }
            ]
        });

        let items = map_text_versions(&payload);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("Enrolled"));
    }

    #[test]
    fn missing_version_date_renders_as_unknown() {
        let payload = json!({
            "textVersions": [{
                "type": "Introduced",
                "formats": [{"type": "Formatted Text", "url": "https://www.congress.gov/c.htm"}]
            }]
        });

        let items = map_text_versions(&payload);
        assert_eq!(items[0].description, "Text version of the bill as of unknown");
    }

    #[test]
    fn empty_or_absent_payload_maps_to_empty_list() {
        assert!(map_text_versions(&json!({})).is_empty());
        assert!(map_text_versions(&json!({"textVersions": []})).is_empty());
    }
}
