//! Field extraction from captured document text (OCR output and similar).

use rx_protocol::{ExtractionResult, FieldMap};

use crate::normalizer::ValueNormalizer;
use crate::table::RuleTable;

/// Runs the field cascades of a `RuleTable` over document text.
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor<'t> {
    table: &'t RuleTable,
}

impl FieldExtractor<'static> {
    /// Extractor over the built-in rule table.
    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin())
    }
}

impl<'t> FieldExtractor<'t> {
    pub fn new(table: &'t RuleTable) -> Self {
        Self { table }
    }

    /// Raw (pre-normalization) values keyed by field name.
    ///
    /// Every field is searched independently; within a field the first
    /// matching pattern wins. Fields with no match are absent.
    pub fn extract_raw(&self, text: &str) -> FieldMap {
        let flattened = flatten(text);
        let mut raw = self.table.fields().captures(&flattened);
        for value in raw.values_mut() {
            *value = collapse_whitespace(value);
        }
        tracing::debug!(candidates = raw.len(), "raw fields extracted");
        raw
    }

    /// Extracted and normalized fields. Trivial values are dropped.
    pub fn extract_fields(&self, text: &str) -> FieldMap {
        ValueNormalizer::normalize_all(&self.extract_raw(text))
    }

    /// Full extraction record for one document.
    pub fn extract_document(&self, source: &str, text: &str) -> ExtractionResult {
        let fields = self.extract_fields(text);
        tracing::debug!(source, field_count = fields.len(), "document fields extracted");
        ExtractionResult::new(source, text, fields)
    }
}

/// Join all lines with single spaces and lowercase the result.
///
/// A trailing line break leaves a trailing space, which labelled patterns
/// can still match against.
fn flatten(text: &str) -> String {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
