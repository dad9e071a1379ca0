//! Agent error types.

use thiserror::Error;

/// Errors raised around the engine: reading input, loading configuration,
/// writing reports. The engine itself never fails at call time.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("input not found: {0}")]
    NotFound(String),

    #[error("input is empty: {0}")]
    EmptyInput(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid rule table: {0}")]
    Rules(#[from] rx_rules::RuleError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("usage: {0}")]
    Usage(String),
}

/// Convenience alias for agent results.
pub type AgentResult<T> = Result<T, AgentError>;
