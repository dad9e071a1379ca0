//! Agent configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use rx_rules::{RuleTable, RuleTableDef};
use serde::Deserialize;

use crate::error::{AgentError, AgentResult};

/// Top-level configuration for the agent. Every key has a default, so an
/// empty file (or no file at all) is valid.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Directory reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Report file name for transcript interpretation.
    #[serde(default = "default_intent_file")]
    pub intent_file: String,
    /// Report file name for document extraction.
    #[serde(default = "default_fields_file")]
    pub fields_file: String,
    /// Pretty-print JSON reports.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// TOML rule table replacing the built-in one. None uses the built-in.
    #[serde(default)]
    pub rules_path: Option<String>,
}

fn default_output_dir() -> String {
    "outputs".into()
}
fn default_intent_file() -> String {
    "intent.json".into()
}
fn default_fields_file() -> String {
    "fields.json".into()
}
fn default_pretty() -> bool {
    true
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            intent_file: default_intent_file(),
            fields_file: default_fields_file(),
            pretty: default_pretty(),
            rules_path: None,
        }
    }
}

impl AgentConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn intent_report_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(&self.intent_file)
    }

    pub fn fields_report_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(&self.fields_file)
    }

    /// Compile the configured rule table, if one is configured.
    ///
    /// Any problem here is fatal to startup; callers fall back to
    /// `RuleTable::builtin()` only when this returns `Ok(None)`.
    pub fn load_rules(&self) -> AgentResult<Option<RuleTable>> {
        let Some(path) = &self.rules_path else {
            return Ok(None);
        };
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AgentError::NotFound(path.clone())
            } else {
                AgentError::Io(format!("{path}: {e}"))
            }
        })?;
        parse_rules(&contents).map(Some)
    }
}

/// The custom table when one was loaded, the built-in table otherwise.
pub fn active_rules(custom: Option<&RuleTable>) -> &RuleTable {
    custom.unwrap_or_else(|| RuleTable::builtin())
}

/// Compile a rule table from TOML text.
pub fn parse_rules(contents: &str) -> AgentResult<RuleTable> {
    let def: RuleTableDef =
        toml::from_str(contents).map_err(|e| AgentError::Config(e.to_string()))?;
    Ok(RuleTable::from_def(&def)?)
}
