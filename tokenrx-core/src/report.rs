// tokenrx-core/src/report.rs
//! Data structures describing what a transform changed.

use serde::{Deserialize, Serialize};

/// One field whose value was rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub token_id: String,
    pub key: String,
    pub before: String,
    pub after: String,
}

/// Per-key count of rewritten fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummaryItem {
    pub key: String,
    pub occurrences: usize,
}

/// Everything one rule changed during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformReport {
    pub rule: String,
    pub tokens_seen: usize,
    pub changes: Vec<FieldChange>,
}

impl TransformReport {
    pub fn new(rule: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            ..Default::default()
        }
    }

    /// Number of distinct tokens with at least one rewritten field.
    pub fn tokens_changed(&self) -> usize {
        let mut ids: Vec<&str> = self.changes.iter().map(|c| c.token_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// Counts per key, in the order each key first changed.
    pub fn summary(&self) -> Vec<ChangeSummaryItem> {
        let mut items: Vec<ChangeSummaryItem> = Vec::new();
        for change in &self.changes {
            match items.iter_mut().find(|item| item.key == change.key) {
                Some(item) => item.occurrences += 1,
                None => items.push(ChangeSummaryItem {
                    key: change.key.clone(),
                    occurrences: 1,
                }),
            }
        }
        items
    }
}
