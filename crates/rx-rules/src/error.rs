//! Rule table configuration errors.

use thiserror::Error;

/// Which half of the rule table a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Intent,
    Field,
    Parameter,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Intent => "intent",
            Self::Field => "field",
            Self::Parameter => "parameter",
        })
    }
}

/// Malformed rule configuration. Raised only while building a `RuleTable`,
/// never while classifying or extracting.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("duplicate {kind} rule: {name}")]
    Duplicate { kind: RuleKind, name: String },

    #[error("intent name '{0}' is reserved")]
    ReservedName(String),

    #[error("{kind} rule '{name}' has no keywords")]
    EmptyKeywords { kind: RuleKind, name: String },

    #[error("{kind} rule '{name}' has no patterns")]
    EmptyPatterns { kind: RuleKind, name: String },

    #[error("invalid pattern for '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("pattern for '{rule}' has no capturing group: {pattern}")]
    MissingCaptureGroup { rule: String, pattern: String },
}

/// Convenience alias for rule table construction results.
pub type RuleResult<T> = Result<T, RuleError>;
