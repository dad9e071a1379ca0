//! In-memory text source for tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{AgentError, AgentResult};
use crate::source::TextSource;

/// Sample transcript used by tests and demos.
pub const SAMPLE_TRANSCRIPT: &str = "I want to book an appointment for Monday at 2pm";

/// Sample OCR output of a driver license.
pub const SAMPLE_LICENSE: &str = "DRIVER LICENSE
DL No: D1234567
DOB: 5-21-90
Phone: (555) 867-5309
Expires: 08/14/2031
Issued by: Department of Motor Vehicles";

/// Text source backed by a path → text map.
#[derive(Debug, Default, Clone)]
pub struct MockTextSource {
    files: HashMap<String, String>,
}

impl MockTextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.files.insert(path.into(), text.into());
        self
    }

    /// One transcript at `/tmp/transcript.txt`.
    pub fn with_transcript_sample() -> Self {
        Self::new().with_file("/tmp/transcript.txt", SAMPLE_TRANSCRIPT)
    }

    /// One license scan at `/tmp/license.txt`.
    pub fn with_license_sample() -> Self {
        Self::new().with_file("/tmp/license.txt", SAMPLE_LICENSE)
    }
}

#[async_trait]
impl TextSource for MockTextSource {
    async fn read_text(&self, path: &str) -> AgentResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AgentError::NotFound(path.to_string()))
    }
}
