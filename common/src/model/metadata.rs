use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata record returned by the model-metadata endpoint.
///
/// The endpoint replies with a flat JSON object: a `date_released` string
/// plus one key per metadata term, each mapping to the list of option values
/// currently saved on the resource. Terms are open-ended (they mirror the
/// fields the page declares), so everything except `date_released` is
/// captured in a flattened map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Release date of the model program, date-parsable (`YYYY-MM-DD` or a
    /// full timestamp). Absent when the resource has no release date yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_released: Option<String>,

    /// Metadata term name -> values currently selected on the resource.
    #[serde(flatten)]
    pub terms: HashMap<String, Vec<String>>,
}

impl ModelMetadata {
    /// Values saved for `term`, or `None` when the response has no such key.
    pub fn selected_for(&self, term: &str) -> Option<&[String]> {
        self.terms.get(term).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_terms_and_release_date() {
        let raw = r#"{
            "date_released": "2015-10-01",
            "modelProgramLanguage": ["Python", "Fortran"],
            "modelOperatingSystem": []
        }"#;

        let record: ModelMetadata = serde_json::from_str(raw).unwrap();
        assert_eq!(record.date_released.as_deref(), Some("2015-10-01"));
        assert_eq!(
            record.selected_for("modelProgramLanguage"),
            Some(["Python".to_string(), "Fortran".to_string()].as_slice())
        );
        assert_eq!(record.selected_for("modelOperatingSystem"), Some([].as_slice()));
    }

    #[test]
    fn tolerates_missing_release_date() {
        let record: ModelMetadata =
            serde_json::from_str(r#"{"modelProgramLanguage": ["C"]}"#).unwrap();
        assert_eq!(record.date_released, None);
        assert_eq!(record.selected_for("modelProgramLanguage").unwrap().len(), 1);
    }

    #[test]
    fn empty_response_has_no_terms() {
        let record: ModelMetadata = serde_json::from_str("{}").unwrap();
        assert!(record.terms.is_empty());
        assert_eq!(record.selected_for("modelProgramLanguage"), None);
    }
}
