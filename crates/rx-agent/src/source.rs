//! Text source abstraction: where transcripts and captured document text
//! come from (files written by a transcription or OCR step, mocks in tests).

use async_trait::async_trait;

use crate::error::{AgentError, AgentResult};

/// Supplies UTF-8 text for the engine.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Read the full text behind `path`.
    async fn read_text(&self, path: &str) -> AgentResult<String>;
}

/// Reads text from the local filesystem.
pub struct FileTextSource;

#[async_trait]
impl TextSource for FileTextSource {
    async fn read_text(&self, path: &str) -> AgentResult<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AgentError::NotFound(path.to_string())
            } else {
                AgentError::Io(format!("{path}: {e}"))
            }
        })
    }
}
