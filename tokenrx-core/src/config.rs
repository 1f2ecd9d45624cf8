//! Configuration management for `tokenrx-core`.
//!
//! This module defines the rule data structures and handles loading rule sets
//! from YAML (or JSON) files, together with structural validation of the
//! loaded rules.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::TokenRxError;
use crate::token::ID_KEY;

/// The pattern half of a rule, in one of its accepted shapes.
///
/// A bare string is ambiguous between a named-pattern alias and a literal
/// pattern; the normalizer settles that against the pattern library.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RegexSpec {
    /// Alias or literal pattern source with no flags.
    Text(String),
    /// Explicit pattern source with optional flags such as `"gi"`.
    Structured {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flags: Option<String>,
    },
}

impl RegexSpec {
    pub fn structured(pattern: impl Into<String>, flags: Option<&str>) -> Self {
        RegexSpec::Structured {
            pattern: pattern.into(),
            flags: flags.map(str::to_string),
        }
    }
}

impl From<&str> for RegexSpec {
    fn from(value: &str) -> Self {
        RegexSpec::Text(value.to_string())
    }
}

/// A single replace-string rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceStringRule {
    /// Optional label used in logs and change reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Field names to rewrite, in order.
    pub keys: Vec<String>,
    pub regex: RegexSpec,
    /// Literal replacement text. Defaults to the empty string.
    #[serde(default, alias = "replace_by", skip_serializing_if = "Option::is_none")]
    pub replace_by: Option<String>,
    /// Strip leading and trailing whitespace after substitution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<bool>,
}

impl ReplaceStringRule {
    pub fn new<K, S>(keys: K, regex: impl Into<RegexSpec>) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            keys: keys.into_iter().map(Into::into).collect(),
            regex: regex.into(),
            replace_by: None,
            trim: None,
        }
    }

    pub fn with_replace_by(mut self, replace_by: impl Into<String>) -> Self {
        self.replace_by = Some(replace_by.into());
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = Some(trim);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The label shown in logs: the explicit name, or the keys it targets.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("replace-string[{}]", self.keys.join(",")),
        }
    }
}

/// An ordered list of rules applied one after another.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct RuleSet {
    pub rules: Vec<ReplaceStringRule>,
}

impl RuleSet {
    /// Loads a rule set from a YAML or JSON file.
    ///
    /// The file may hold either `{ rules: [...] }` or a single bare rule.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TokenRxError> {
        let path = path.as_ref();
        info!("Loading rules from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let rule_set = Self::from_yaml_str(&text).map_err(|e| {
            TokenRxError::Configuration(format!("{}: {}", path.display(), e))
        })?;
        info!("Loaded {} rules from file {}.", rule_set.rules.len(), path.display());
        Ok(rule_set)
    }

    /// Parses and validates a rule set from YAML (or JSON) text.
    pub fn from_yaml_str(text: &str) -> Result<Self, TokenRxError> {
        let rule_set = match serde_yml::from_str::<RuleSet>(text) {
            Ok(set) => set,
            Err(set_err) => match serde_yml::from_str::<ReplaceStringRule>(text) {
                Ok(rule) => {
                    debug!("Rule file holds a single bare rule.");
                    RuleSet { rules: vec![rule] }
                }
                Err(rule_err) => {
                    // Without a `rules` key the file was meant as a single rule.
                    let reason = if declares_rule_list(text) {
                        set_err.to_string()
                    } else {
                        rule_err.to_string()
                    };
                    return Err(TokenRxError::Configuration(format!(
                        "Failed to parse rules: {}",
                        reason
                    )));
                }
            },
        };
        validate_rules(&rule_set.rules)?;
        Ok(rule_set)
    }
}

fn declares_rule_list(text: &str) -> bool {
    matches!(
        serde_yml::from_str::<serde_yml::Value>(text),
        Ok(value) if value.get("rules").is_some()
    )
}

/// Validates rule structure. Pattern compilation is left to the normalizer,
/// since aliases can only be resolved against a pattern library.
pub fn validate_rules(rules: &[ReplaceStringRule]) -> Result<(), TokenRxError> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        let label = rule.name.clone().unwrap_or_else(|| format!("#{}", index + 1));

        if let Some(name) = &rule.name {
            if name.is_empty() {
                errors.push(format!("Rule {} has an empty `name` field.", label));
            } else if !names.insert(name.as_str()) {
                errors.push(format!("Duplicate rule name found: '{}'.", name));
            }
        }

        if rule.keys.is_empty() {
            warn!("Rule {} has no keys and will not change any token.", label);
        }

        if rule.keys.iter().any(|k| k == ID_KEY) {
            errors.push(format!(
                "Rule {} targets the `{}` field, which is immutable.",
                label, ID_KEY
            ));
        }

        if rule.keys.iter().any(String::is_empty) {
            errors.push(format!("Rule {} has an empty key.", label));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TokenRxError::Configuration(format!(
            "Rule validation failed:\n{}",
            errors.join("\n")
        )))
    }
}
