//! Ordered rule evaluation shared by intent scoring and field extraction.
//!
//! Both passes reduce to two operations over an ordered, immutable list of
//! named rules: score every rule and keep the best one, or run each rule's
//! pattern cascade and keep its first capture.

use std::collections::{BTreeMap, HashSet};

use regex::{Regex, RegexBuilder};

use crate::error::{RuleError, RuleKind, RuleResult};

/// A named entry in a `RuleSet`.
pub trait Rule {
    fn name(&self) -> &str;
}

/// A rule that extracts a value through a pattern cascade.
pub trait CaptureRule: Rule {
    fn cascade(&self) -> &Cascade;
}

// ── Pattern ───────────────────────────────────────────────────

/// Case-insensitive regex with at least one capturing group.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `source` for the rule named `rule`.
    pub fn compile(rule: &str, source: &str) -> RuleResult<Self> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::InvalidPattern {
                rule: rule.to_string(),
                source: e,
            })?;

        // captures_len counts the implicit whole-match group.
        if regex.captures_len() < 2 {
            return Err(RuleError::MissingCaptureGroup {
                rule: rule.to_string(),
                pattern: source.to_string(),
            });
        }

        Ok(Self { regex })
    }

    /// Group 1 of the leftmost match, if the pattern matches and the group
    /// participated.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.captures(text)?.get(1).map(|m| m.as_str())
    }
}

// ── Cascade ───────────────────────────────────────────────────

/// Ordered patterns tried in sequence; the first match wins.
#[derive(Debug, Clone)]
pub struct Cascade {
    patterns: Vec<Pattern>,
}

impl Cascade {
    pub fn compile<S: AsRef<str>>(rule: &str, kind: RuleKind, sources: &[S]) -> RuleResult<Self> {
        if sources.is_empty() {
            return Err(RuleError::EmptyPatterns {
                kind,
                name: rule.to_string(),
            });
        }
        let patterns = sources
            .iter()
            .map(|s| Pattern::compile(rule, s.as_ref()))
            .collect::<RuleResult<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Trimmed capture of the first pattern that matches. A match ends the
    /// cascade even if its capture trims to nothing.
    pub fn first_capture(&self, text: &str) -> Option<String> {
        self.patterns
            .iter()
            .find_map(|p| p.capture(text))
            .map(|c| c.trim().to_string())
    }
}

// ── KeywordSet ────────────────────────────────────────────────

/// Lowercase keywords matched by plain substring containment.
///
/// "tel" matches inside "hotel"; there is no word-boundary check.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<S: AsRef<str>>(rule: &str, kind: RuleKind, keywords: &[S]) -> RuleResult<Self> {
        if keywords.is_empty() || keywords.iter().any(|k| k.as_ref().trim().is_empty()) {
            return Err(RuleError::EmptyKeywords {
                kind,
                name: rule.to_string(),
            });
        }
        Ok(Self {
            keywords: keywords.iter().map(|k| k.as_ref().to_lowercase()).collect(),
        })
    }

    /// Number of keywords occurring in `text` (expected already lowercased).
    pub fn score(&self, text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .count()
    }

    /// Number of keywords; never zero.
    pub fn total(&self) -> usize {
        self.keywords.len()
    }
}

// ── RuleSet ───────────────────────────────────────────────────

/// Immutable, ordered list of uniquely named rules.
///
/// Declaration order is part of the contract: it breaks score ties and fixes
/// the order cascades run in.
#[derive(Debug, Clone)]
pub struct RuleSet<R> {
    kind: RuleKind,
    rules: Vec<R>,
}

impl<R: Rule> RuleSet<R> {
    pub fn new(kind: RuleKind, rules: Vec<R>) -> RuleResult<Self> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !seen.insert(rule.name()) {
                return Err(RuleError::Duplicate {
                    kind,
                    name: rule.name().to_string(),
                });
            }
        }
        Ok(Self { kind, rules })
    }

    pub fn get(&self, name: &str) -> Option<&R> {
        self.rules.iter().find(|r| r.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule with the strictly highest nonzero score. Ties go to the
    /// earliest-declared rule. `None` when every score is zero.
    pub fn top_scoring<F>(&self, score: F) -> Option<(&R, usize)>
    where
        F: Fn(&R) -> usize,
    {
        let mut best: Option<(&R, usize)> = None;
        for rule in &self.rules {
            let s = score(rule);
            tracing::trace!(kind = %self.kind, rule = rule.name(), score = s, "rule scored");
            if s > 0 && best.is_none_or(|(_, top)| s > top) {
                best = Some((rule, s));
            }
        }
        best
    }
}

impl<R: CaptureRule> RuleSet<R> {
    /// Run every rule's cascade independently and collect the captures that
    /// succeeded. Rules whose cascade misses are absent from the map.
    pub fn captures(&self, text: &str) -> BTreeMap<String, String> {
        let mut found = BTreeMap::new();
        for rule in &self.rules {
            if let Some(value) = rule.cascade().first_capture(text) {
                tracing::trace!(kind = %self.kind, rule = rule.name(), value = %value, "rule captured");
                found.insert(rule.name().to_string(), value);
            }
        }
        found
    }
}

impl<'a, R> IntoIterator for &'a RuleSet<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
