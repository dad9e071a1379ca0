//! The immutable rule table: intent rules and field rules, in declared order.

use std::collections::HashSet;
use std::sync::LazyLock;

use rx_protocol::UNKNOWN_INTENT;
use serde::Deserialize;

use crate::builtin;
use crate::error::{RuleError, RuleKind, RuleResult};
use crate::ruleset::{Cascade, CaptureRule, KeywordSet, Rule, RuleSet};

// ── Plain definitions ─────────────────────────────────────────

/// A named parameter pattern of an intent.
#[derive(Debug, Clone, Deserialize)]
pub struct ParamDef {
    pub name: String,
    pub pattern: String,
}

/// Unvalidated intent rule.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentDef {
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<ParamDef>,
}

/// Unvalidated field rule.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub patterns: Vec<String>,
}

/// Unvalidated rule table, e.g. as loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleTableDef {
    #[serde(default)]
    pub intents: Vec<IntentDef>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

// ── Compiled rules ────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ParamRule {
    name: String,
    cascade: Cascade,
}

impl Rule for ParamRule {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CaptureRule for ParamRule {
    fn cascade(&self) -> &Cascade {
        &self.cascade
    }
}

#[derive(Debug, Clone)]
pub struct IntentRule {
    name: String,
    keywords: KeywordSet,
    parameters: RuleSet<ParamRule>,
}

impl IntentRule {
    fn compile(def: &IntentDef) -> RuleResult<Self> {
        if def.name == UNKNOWN_INTENT {
            return Err(RuleError::ReservedName(def.name.clone()));
        }
        let keywords = KeywordSet::new(&def.name, RuleKind::Intent, &def.keywords)?;
        let parameters = def
            .parameters
            .iter()
            .map(|p| {
                let owner = format!("{}.{}", def.name, p.name);
                Ok(ParamRule {
                    name: p.name.clone(),
                    cascade: Cascade::compile(&owner, RuleKind::Parameter, &[p.pattern.as_str()])?,
                })
            })
            .collect::<RuleResult<Vec<_>>>()?;

        Ok(Self {
            name: def.name.clone(),
            keywords,
            parameters: RuleSet::new(RuleKind::Parameter, parameters)?,
        })
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn parameters(&self) -> &RuleSet<ParamRule> {
        &self.parameters
    }
}

impl Rule for IntentRule {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    name: String,
    cascade: Cascade,
}

impl FieldRule {
    fn compile(def: &FieldDef) -> RuleResult<Self> {
        Ok(Self {
            name: def.name.clone(),
            cascade: Cascade::compile(&def.name, RuleKind::Field, &def.patterns)?,
        })
    }
}

impl Rule for FieldRule {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CaptureRule for FieldRule {
    fn cascade(&self) -> &Cascade {
        &self.cascade
    }
}

// ── RuleTable ─────────────────────────────────────────────────

static BUILTIN: LazyLock<RuleTable> = LazyLock::new(|| {
    RuleTable::from_def(&builtin::definitions()).expect("built-in rule table is valid")
});

/// Validated, read-only configuration shared by every classification and
/// extraction call. Built once; there is no way to mutate it afterwards.
#[derive(Debug, Clone)]
pub struct RuleTable {
    intents: RuleSet<IntentRule>,
    fields: RuleSet<FieldRule>,
}

impl RuleTable {
    /// Validate and compile a table definition.
    pub fn from_def(def: &RuleTableDef) -> RuleResult<Self> {
        // Check names before compiling so a duplicate is reported as such
        // rather than as whatever pattern error follows it.
        check_unique(RuleKind::Intent, def.intents.iter().map(|i| i.name.as_str()))?;
        check_unique(RuleKind::Field, def.fields.iter().map(|f| f.name.as_str()))?;

        let intents = def
            .intents
            .iter()
            .map(IntentRule::compile)
            .collect::<RuleResult<Vec<_>>>()?;
        let fields = def
            .fields
            .iter()
            .map(FieldRule::compile)
            .collect::<RuleResult<Vec<_>>>()?;

        let table = Self {
            intents: RuleSet::new(RuleKind::Intent, intents)?,
            fields: RuleSet::new(RuleKind::Field, fields)?,
        };
        tracing::debug!(
            intents = table.intents.len(),
            fields = table.fields.len(),
            "rule table compiled"
        );
        Ok(table)
    }

    /// The built-in table, compiled on first use.
    pub fn builtin() -> &'static RuleTable {
        &BUILTIN
    }

    pub fn intents(&self) -> &RuleSet<IntentRule> {
        &self.intents
    }

    pub fn fields(&self) -> &RuleSet<FieldRule> {
        &self.fields
    }
}

fn check_unique<'a>(kind: RuleKind, names: impl Iterator<Item = &'a str>) -> RuleResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(RuleError::Duplicate {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
