use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Intent reported when no keyword of any rule occurs in the input.
pub const UNKNOWN_INTENT: &str = "unknown";

/// Parameter name → extracted value, ordered by name for stable output.
pub type ParamMap = BTreeMap<String, String>;

/// Field name → normalized value, ordered by name for stable output.
pub type FieldMap = BTreeMap<String, String>;

/// Outcome of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning intent name, or `"unknown"`.
    pub intent: String,
    /// Parameters whose pattern matched. Absent parameters are omitted.
    #[serde(default)]
    pub parameters: ParamMap,
    /// Matched keywords / total keywords of the winner, 2 decimal places.
    pub confidence: f64,
    /// The utterance exactly as supplied by the caller.
    pub original_text: String,
}

impl ClassificationResult {
    /// Result for text that hit no keyword at all.
    pub fn unknown(original_text: impl Into<String>) -> Self {
        Self {
            intent: UNKNOWN_INTENT.to_string(),
            parameters: ParamMap::new(),
            confidence: 0.0,
            original_text: original_text.into(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.intent == UNKNOWN_INTENT
    }

    /// Parameter value, treating an empty capture as absent.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Fields pulled out of one document's captured text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Where the text came from (file path, upload name).
    pub source_text: String,
    /// The captured text the fields were extracted from.
    pub raw_text: String,
    /// Normalized fields; every value is longer than 2 characters.
    pub fields: FieldMap,
    /// Always `fields.len()`.
    pub field_count: usize,
}

impl ExtractionResult {
    pub fn new(source_text: impl Into<String>, raw_text: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            source_text: source_text.into(),
            raw_text: raw_text.into(),
            field_count: fields.len(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_result_shape() {
        let result = ClassificationResult::unknown("hello");
        assert!(result.is_unknown());
        assert_eq!(result.confidence, 0.0);
        assert!(result.parameters.is_empty());
        assert_eq!(result.original_text, "hello");
    }

    #[test]
    fn classification_serializes_snake_case() {
        let mut parameters = ParamMap::new();
        parameters.insert("date".into(), "monday".into());
        let result = ClassificationResult {
            intent: "book_appointment".into(),
            parameters,
            confidence: 0.4,
            original_text: "Book me for Monday".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["intent"], "book_appointment");
        assert_eq!(json["parameters"]["date"], "monday");
        assert_eq!(json["confidence"], 0.4);
        assert_eq!(json["original_text"], "Book me for Monday");
    }

    #[test]
    fn missing_parameters_deserialize_empty() {
        let json = r#"{"intent": "unknown", "confidence": 0.0, "original_text": ""}"#;
        let result: ClassificationResult = serde_json::from_str(json).unwrap();
        assert!(result.parameters.is_empty());
    }

    #[test]
    fn empty_param_counts_as_absent() {
        let mut result = ClassificationResult::unknown("x");
        result.parameters.insert("date".into(), String::new());
        assert_eq!(result.param("date"), None);
    }

    #[test]
    fn extraction_counts_fields() {
        let mut fields = FieldMap::new();
        fields.insert("email".into(), "a@b.com".into());
        fields.insert("name".into(), "John Doe".into());
        let result = ExtractionResult::new("scan.png", "Name: John Doe", fields);
        assert_eq!(result.field_count, 2);

        let json = serde_json::to_string(&result).unwrap();
        // BTreeMap keeps keys sorted, so output is byte-stable.
        assert!(json.find("\"email\"").unwrap() < json.find("\"name\"").unwrap());
    }
}
