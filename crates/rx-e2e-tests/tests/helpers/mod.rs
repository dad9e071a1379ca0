//! Shared test harness for E2E integration tests.
//!
//! Wires the agent pipeline to an in-memory text source and a scratch
//! output directory, exercising real code paths across all crate boundaries.

#![allow(dead_code)]

use std::path::PathBuf;

use rx_agent::MockTextSource;
use rx_agent::config::AgentConfig;
use rx_agent::pipeline::{self, Pipeline};
use rx_protocol::{DocumentReport, InterpretReport};
use rx_rules::RuleTable;
use tempfile::TempDir;

/// End-to-end harness: mock text source + temp output directory.
pub struct TestHarness {
    pub source: MockTextSource,
    pub config: AgentConfig,
    /// Kept alive so the output directory outlives the test body.
    pub out_dir: TempDir,
}

impl TestHarness {
    pub fn new(source: MockTextSource) -> Self {
        let out_dir = tempfile::tempdir().unwrap();
        let config = AgentConfig {
            output_dir: out_dir.path().to_string_lossy().into_owned(),
            ..AgentConfig::default()
        };
        Self {
            source,
            config,
            out_dir,
        }
    }

    /// Harness with one transcript stored at `/in/transcript.txt`.
    pub fn with_transcript(text: &str) -> Self {
        Self::new(MockTextSource::new().with_file("/in/transcript.txt", text))
    }

    /// Harness with one document text stored at `/in/document.txt`.
    pub fn with_document(text: &str) -> Self {
        Self::new(MockTextSource::new().with_file("/in/document.txt", text))
    }

    pub fn pipeline(&self) -> Pipeline<'_> {
        Pipeline::new(RuleTable::builtin(), &self.source)
    }

    /// Interpret `/in/transcript.txt` and persist the report.
    pub async fn interpret(&self) -> InterpretReport {
        let report = self.pipeline().interpret("/in/transcript.txt").await.unwrap();
        pipeline::write_report(&self.config.intent_report_path(), &report, self.config.pretty)
            .await
            .unwrap();
        report
    }

    /// Extract `/in/document.txt` and persist the report.
    pub async fn extract(&self) -> DocumentReport {
        let report = self.pipeline().extract("/in/document.txt").await.unwrap();
        pipeline::write_report(&self.config.fields_report_path(), &report, self.config.pretty)
            .await
            .unwrap();
        report
    }

    /// Read a written report back as JSON.
    pub fn read_report(&self, path: PathBuf) -> serde_json::Value {
        let contents = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&contents).unwrap()
    }
}
