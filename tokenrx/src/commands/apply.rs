//! `apply` command: run a rule file over a token collection.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tokenrx_core::{apply_rules_with_report, tokens_from_json, RuleSet, TransformReport};

use crate::commands::{info_msg, load_pattern_library, warn_msg};
use crate::ui::{diff_viewer, summary};

/// Options for the `run_apply` API.
pub struct ApplyOptions {
    pub tokens_path: Option<PathBuf>,
    pub rules_path: PathBuf,
    pub patterns_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub diff: bool,
    pub no_summary: bool,
    pub quiet: bool,
}

/// Reads tokens, rules and patterns, applies the rules and writes the result.
pub fn run_apply(opts: ApplyOptions) -> Result<Vec<TransformReport>> {
    info!("Starting apply operation.");

    let input = read_input(opts.tokens_path.as_deref())?;
    let tokens = tokens_from_json(&input).context("Failed to parse tokens: expected a JSON array of objects with an `id`")?;
    let rules = RuleSet::load_from_file(&opts.rules_path)
        .with_context(|| format!("Failed to load rules from {}", opts.rules_path.display()))?;
    let libs = load_pattern_library(opts.patterns_path.as_deref())?;

    if tokens.is_empty() && !opts.quiet {
        warn_msg("The token input is empty; nothing to transform.");
    }

    let (output, reports) =
        apply_rules_with_report(&tokens, &rules, &libs).context("Failed to apply rules")?;
    debug!("Transformed {} token(s) with {} rule(s).", output.len(), reports.len());

    let rendered = serde_json::to_string_pretty(&output).context("Failed to serialize tokens")?;
    write_primary_output(&opts, &rendered)?;

    if opts.diff {
        let original = serde_json::to_string_pretty(&tokens).context("Failed to serialize tokens")?;
        let stderr_supports_color = io::stderr().is_terminal();
        diff_viewer::print_diff(&original, &rendered, &mut io::stderr(), stderr_supports_color)?;
    }

    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        summary::print_summary(&reports, &mut io::stderr(), stderr_supports_color)?;
    }

    info!("Apply operation completed.");
    Ok(reports)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read tokens from {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read tokens from stdin")?;
            Ok(buffer)
        }
    }
}

fn write_primary_output(opts: &ApplyOptions, rendered: &str) -> Result<()> {
    match &opts.output_path {
        Some(path) => {
            if !opts.quiet {
                info_msg(format!("Writing transformed tokens to file: {}", path.display()));
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", rendered)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", rendered)?;
        }
    }
    Ok(())
}
