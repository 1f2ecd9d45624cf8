//! `check` command: normalize every rule and report how it resolved.

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::PathBuf;

use tokenrx_core::{compile_pattern, resolve_spec, NamedPatternResolver, PatternSource, RuleSet};

use crate::commands::{error_msg, load_pattern_library, success_msg};

pub struct CheckOptions {
    pub rules_path: PathBuf,
    pub patterns_path: Option<PathBuf>,
    pub quiet: bool,
}

pub fn run_check(opts: CheckOptions) -> Result<()> {
    let rules = RuleSet::load_from_file(&opts.rules_path)
        .with_context(|| format!("Failed to load rules from {}", opts.rules_path.display()))?;
    let libs = load_pattern_library(opts.patterns_path.as_deref())?;

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    let failures = check_rules(&rules, &libs, &mut writer)?;

    if failures > 0 {
        bail!("{} of {} rule(s) failed to normalize", failures, rules.rules.len());
    }
    if !opts.quiet {
        success_msg(format!("All {} rule(s) normalized.", rules.rules.len()));
    }
    Ok(())
}

/// Writes one line per rule and returns how many rules failed.
pub fn check_rules<L, W>(rules: &RuleSet, libs: &L, writer: &mut W) -> Result<usize>
where
    L: NamedPatternResolver + ?Sized,
    W: Write,
{
    let mut failures = 0;
    for rule in &rules.rules {
        let label = rule.label();
        let outcome = resolve_spec(&rule.regex, libs)
            .and_then(|(resolved, source)| compile_pattern(&resolved).map(|expr| (expr, source)));
        match outcome {
            Ok((expr, source)) => {
                let origin = match source {
                    PatternSource::Alias(name) => format!("named pattern '{}'", name),
                    PatternSource::Literal => "literal".to_string(),
                    PatternSource::Structured => "structured".to_string(),
                };
                writeln!(
                    writer,
                    "ok   {}: /{}/{} ({})",
                    label,
                    expr.source().pattern,
                    expr.flags(),
                    origin
                )?;
            }
            Err(e) => {
                failures += 1;
                writeln!(writer, "FAIL {}: {}", label, e)?;
                error_msg(format!("Rule '{}': {}", label, e));
            }
        }
    }
    Ok(failures)
}
