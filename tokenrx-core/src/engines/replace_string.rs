// tokenrx-core/src/engines/replace_string.rs
//! A `TransformEngine` that rewrites selected string fields with a regex
//! substitution and optional trimming.
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use serde_json::Value;

use crate::config::ReplaceStringRule;
use crate::engine::TransformEngine;
use crate::errors::TokenRxError;
use crate::libs::NamedPatternResolver;
use crate::normalizer::{normalize, CompiledExpression};
use crate::report::FieldChange;
use crate::token::{Token, ID_KEY};

#[derive(Debug, Clone)]
pub struct ReplaceStringEngine {
    label: String,
    keys: Vec<String>,
    replace_by: String,
    trim: bool,
    expression: CompiledExpression,
}

impl ReplaceStringEngine {
    /// Normalizes the rule's pattern against `libs` and builds the engine.
    pub fn new<L>(rule: &ReplaceStringRule, libs: &L) -> Result<Self, TokenRxError>
    where
        L: NamedPatternResolver + ?Sized,
    {
        let label = rule.label();
        let expression = normalize(&rule.regex, libs)?;

        let keys: Vec<String> = rule
            .keys
            .iter()
            .filter(|key| {
                if key.as_str() == ID_KEY {
                    warn!("Rule '{}': ignoring key `{}`, token ids are never rewritten.", label, ID_KEY);
                    false
                } else {
                    true
                }
            })
            .cloned()
            .collect();

        debug!(
            "Rule '{}' ready: keys={:?} pattern=/{}/{} trim={}",
            label,
            keys,
            expression.source().pattern,
            expression.flags(),
            rule.trim.unwrap_or(false)
        );

        Ok(Self {
            label,
            keys,
            replace_by: rule.replace_by.clone().unwrap_or_default(),
            trim: rule.trim.unwrap_or(false),
            expression,
        })
    }

    pub fn expression(&self) -> &CompiledExpression {
        &self.expression
    }

    /// Substitution first, trim second.
    fn rewrite(&self, value: &str) -> String {
        let replaced = self.expression.replace(value, &self.replace_by);
        if self.trim {
            replaced.trim_matches(is_trimmable).to_string()
        } else {
            replaced.into_owned()
        }
    }
}

/// Whitespace as `trim` sees it, including the byte-order mark.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

impl TransformEngine for ReplaceStringEngine {
    fn name(&self) -> &str {
        &self.label
    }

    fn transform_token(&self, token: &Token, changes: &mut Vec<FieldChange>) -> Token {
        let mut output = token.clone();
        for key in &self.keys {
            let Some(Value::String(current)) = output.field_mut(key) else {
                continue;
            };
            let rewritten = self.rewrite(current);
            if rewritten != *current {
                changes.push(FieldChange {
                    token_id: token.id.clone(),
                    key: key.clone(),
                    before: std::mem::replace(current, rewritten.clone()),
                    after: rewritten,
                });
            }
        }
        output
    }
}
