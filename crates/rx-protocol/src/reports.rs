//! Pipeline reports persisted by collaborators after a core call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{ClassificationResult, ExtractionResult};

/// Result of running a transcript through classification and reply generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretReport {
    /// Transcript file the text was read from.
    pub input: String,
    /// Transcript text as read (trimmed).
    pub transcript: String,
    pub classification: ClassificationResult,
    /// Reply produced for the classification.
    pub response_text: String,
    pub processed_at: DateTime<Utc>,
}

impl InterpretReport {
    pub fn new(
        input: impl Into<String>,
        transcript: impl Into<String>,
        classification: ClassificationResult,
        response_text: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            transcript: transcript.into(),
            classification,
            response_text: response_text.into(),
            processed_at: Utc::now(),
        }
    }
}

/// Result of running captured document text through field extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    /// File the captured text was read from.
    pub input: String,
    pub extraction: ExtractionResult,
    pub processed_at: DateTime<Utc>,
}

impl DocumentReport {
    pub fn new(input: impl Into<String>, extraction: ExtractionResult) -> Self {
        Self {
            input: input.into(),
            extraction,
            processed_at: Utc::now(),
        }
    }

    /// True when at least one field survived normalization.
    pub fn has_fields(&self) -> bool {
        self.extraction.field_count > 0
    }
}
