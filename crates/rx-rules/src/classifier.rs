//! Keyword-scored intent classification with regex parameter capture.

use rx_protocol::{ClassificationResult, ParamMap};

use crate::ruleset::Rule;
use crate::table::RuleTable;

/// Classifies utterances against the intent half of a `RuleTable`.
#[derive(Debug, Clone, Copy)]
pub struct IntentClassifier<'t> {
    table: &'t RuleTable,
}

impl IntentClassifier<'static> {
    /// Classifier over the built-in rule table.
    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin())
    }
}

impl<'t> IntentClassifier<'t> {
    pub fn new(table: &'t RuleTable) -> Self {
        Self { table }
    }

    /// Pick the intent whose keywords occur most often in `text` and pull
    /// its parameters. Text hitting no keyword is classified `"unknown"`.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let normalized = text.to_lowercase();
        let normalized = normalized.trim();

        let Some((rule, score)) = self
            .table
            .intents()
            .top_scoring(|r| r.keywords().score(normalized))
        else {
            tracing::debug!("no intent keywords matched");
            return ClassificationResult::unknown(text);
        };

        let parameters: ParamMap = rule.parameters().captures(normalized);
        let confidence = confidence(score, rule.keywords().total());

        tracing::debug!(
            intent = rule.name(),
            score,
            confidence,
            parameters = parameters.len(),
            "intent classified"
        );

        ClassificationResult {
            intent: rule.name().to_string(),
            parameters,
            confidence,
            original_text: text.to_string(),
        }
    }
}

/// `matched / total`, rounded half-to-even to 2 decimal places and clamped
/// to [0, 1].
fn confidence(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = matched as f64 / total as f64;
    ((ratio * 100.0).round_ties_even() / 100.0).clamp(0.0, 1.0)
}
