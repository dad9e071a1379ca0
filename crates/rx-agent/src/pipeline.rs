//! Pipeline driver: text source → engine → report.

use std::path::Path;

use rx_protocol::{DocumentReport, InterpretReport};
use rx_rules::{FieldExtractor, IntentClassifier, ResponseGenerator, RuleTable};
use serde::Serialize;

use crate::error::{AgentError, AgentResult};
use crate::source::TextSource;

/// Runs transcripts and captured document text through the rule engine.
pub struct Pipeline<'a> {
    classifier: IntentClassifier<'a>,
    extractor: FieldExtractor<'a>,
    source: &'a dyn TextSource,
}

impl<'a> Pipeline<'a> {
    pub fn new(table: &'a RuleTable, source: &'a dyn TextSource) -> Self {
        Self {
            classifier: IntentClassifier::new(table),
            extractor: FieldExtractor::new(table),
            source,
        }
    }

    /// Classify the transcript at `path` and generate a reply.
    pub async fn interpret(&self, path: &str) -> AgentResult<InterpretReport> {
        let transcript = self.read_nonempty(path).await?;
        tracing::info!(input = path, bytes = transcript.len(), "interpreting transcript");

        let classification = self.classifier.classify(&transcript);
        let response_text = ResponseGenerator::respond(&classification);

        tracing::info!(
            intent = %classification.intent,
            confidence = classification.confidence,
            parameters = classification.parameters.len(),
            "transcript interpreted"
        );
        Ok(InterpretReport::new(path, transcript, classification, response_text))
    }

    /// Extract labelled fields from the captured document text at `path`.
    pub async fn extract(&self, path: &str) -> AgentResult<DocumentReport> {
        let text = self.read_nonempty(path).await?;
        tracing::info!(input = path, bytes = text.len(), "extracting document fields");

        let extraction = self.extractor.extract_document(path, &text);
        if extraction.field_count == 0 {
            tracing::warn!(input = path, "no fields found in document text");
        } else {
            tracing::info!(input = path, field_count = extraction.field_count, "document extracted");
        }
        Ok(DocumentReport::new(path, extraction))
    }

    async fn read_nonempty(&self, path: &str) -> AgentResult<String> {
        let text = self.source.read_text(path).await?;
        let text = text.trim();
        if text.is_empty() {
            tracing::warn!(input = path, "input text is empty");
            return Err(AgentError::EmptyInput(path.to_string()));
        }
        Ok(text.to_string())
    }
}

/// Serialize `report` as JSON to `path`, creating parent directories.
pub async fn write_report<T: Serialize>(path: &Path, report: &T, pretty: bool) -> AgentResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AgentError::Io(format!("{}: {e}", parent.display())))?;
    }
    tokio::fs::write(path, json)
        .await
        .map_err(|e| AgentError::Io(format!("{}: {e}", path.display())))?;

    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
