// tokenrx-core/src/headless.rs
//! One-shot entry points: normalize, run, return.

use log::{debug, info};

use crate::config::{ReplaceStringRule, RuleSet};
use crate::engine::TransformEngine;
use crate::engines::replace_string::ReplaceStringEngine;
use crate::errors::TokenRxError;
use crate::libs::NamedPatternResolver;
use crate::report::TransformReport;
use crate::token::Token;

/// Applies a single replace-string rule to a token collection.
///
/// The rule is normalized exactly once. If that fails, the error is returned
/// and no token is transformed. Otherwise the result has the same length, ids
/// and order as `tokens`, and `tokens` itself is never modified.
///
/// # Arguments
///
/// * `tokens` - The input collection.
/// * `rule` - Keys, pattern, replacement and trim setting.
/// * `libs` - Named-pattern lookup used to resolve a bare-string `regex`.
pub fn replace_string<L>(
    tokens: &[Token],
    rule: &ReplaceStringRule,
    libs: &L,
) -> Result<Vec<Token>, TokenRxError>
where
    L: NamedPatternResolver + ?Sized,
{
    let engine = ReplaceStringEngine::new(rule, libs)?;
    Ok(engine.run(tokens))
}

/// Builds one engine per rule, failing on the first rule that does not normalize.
pub fn build_engines<L>(
    rules: &RuleSet,
    libs: &L,
) -> Result<Vec<Box<dyn TransformEngine>>, TokenRxError>
where
    L: NamedPatternResolver + ?Sized,
{
    rules
        .rules
        .iter()
        .map(|rule| {
            ReplaceStringEngine::new(rule, libs).map(|e| Box::new(e) as Box<dyn TransformEngine>)
        })
        .collect()
}

/// Applies every rule of a set in order. All rules are normalized before any
/// token is touched.
pub fn apply_rules<L>(tokens: &[Token], rules: &RuleSet, libs: &L) -> Result<Vec<Token>, TokenRxError>
where
    L: NamedPatternResolver + ?Sized,
{
    apply_rules_with_report(tokens, rules, libs).map(|(output, _)| output)
}

/// Like [`apply_rules`], also returning one report per rule.
pub fn apply_rules_with_report<L>(
    tokens: &[Token],
    rules: &RuleSet,
    libs: &L,
) -> Result<(Vec<Token>, Vec<TransformReport>), TokenRxError>
where
    L: NamedPatternResolver + ?Sized,
{
    let engines = build_engines(rules, libs)?;
    info!("Applying {} rule(s) to {} token(s).", engines.len(), tokens.len());

    let mut current = tokens.to_vec();
    let mut reports = Vec::with_capacity(engines.len());
    for engine in &engines {
        let (next, report) = engine.run_with_report(&current);
        debug!(
            "Rule '{}' changed {} field(s) across {} token(s).",
            report.rule,
            report.changes.len(),
            report.tokens_changed()
        );
        current = next;
        reports.push(report);
    }
    Ok((current, reports))
}
