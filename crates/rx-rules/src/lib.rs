//! Deterministic rule-based text understanding for Receptro.
//!
//! Two faces over one design: classify an utterance into an intent and pull
//! its parameters, or scan captured document text for labelled fields. Both
//! run an ordered `RuleTable` over normalized text and pick winners by
//! declared order. No learned model, no I/O, no shared mutable state; every
//! call is a pure function of its input and the table.

pub mod builtin;
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod normalizer;
pub mod responder;
pub mod ruleset;
pub mod table;

pub use classifier::IntentClassifier;
pub use error::{RuleError, RuleKind, RuleResult};
pub use extractor::FieldExtractor;
pub use normalizer::ValueNormalizer;
pub use responder::{FALLBACK_REPLY, ResponseGenerator};
pub use ruleset::{Cascade, CaptureRule, KeywordSet, Pattern, Rule, RuleSet};
pub use table::{FieldDef, IntentDef, ParamDef, RuleTable, RuleTableDef};

use rx_protocol::{ClassificationResult, ExtractionResult};

/// Classify `text` against the built-in rule table.
pub fn classify(text: &str) -> ClassificationResult {
    IntentClassifier::builtin().classify(text)
}

/// Reply text for a classification result.
pub fn respond(result: &ClassificationResult) -> String {
    ResponseGenerator::respond(result)
}

/// Extract and normalize document fields using the built-in rule table.
pub fn extract_fields(source: &str, text: &str) -> ExtractionResult {
    FieldExtractor::builtin().extract_document(source, text)
}
