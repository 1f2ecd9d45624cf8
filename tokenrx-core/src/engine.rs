// tokenrx-core/src/engine.rs
//! Defines the `TransformEngine` trait.
//!
//! An engine is a rule that has already been normalized: building one is the
//! only fallible step, and running it over tokens cannot fail. Callers that
//! chain several rules hold them as `Box<dyn TransformEngine>`.
//!
//! License: MIT OR APACHE 2.0

use crate::report::{FieldChange, TransformReport};
use crate::token::Token;

/// A normalized, reusable token transformation.
pub trait TransformEngine: Send + Sync {
    /// A label for logs and reports.
    fn name(&self) -> &str;

    /// Produces the transformed copy of one token, recording every field whose
    /// value changed. The input token is left untouched.
    fn transform_token(&self, token: &Token, changes: &mut Vec<FieldChange>) -> Token;

    /// Transforms every token, preserving order and ids.
    fn run(&self, tokens: &[Token]) -> Vec<Token> {
        let mut discarded = Vec::new();
        tokens
            .iter()
            .map(|token| {
                discarded.clear();
                self.transform_token(token, &mut discarded)
            })
            .collect()
    }

    /// Like [`TransformEngine::run`], also returning what changed.
    fn run_with_report(&self, tokens: &[Token]) -> (Vec<Token>, TransformReport) {
        let mut report = TransformReport::new(self.name());
        report.tokens_seen = tokens.len();
        let output = tokens
            .iter()
            .map(|token| self.transform_token(token, &mut report.changes))
            .collect();
        (output, report)
    }
}
