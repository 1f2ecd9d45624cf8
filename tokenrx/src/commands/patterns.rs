//! `patterns` command: list the merged named-pattern library.

use anyhow::{Context, Result};
use comfy_table::Table;
use std::io::Write;
use std::path::PathBuf;

use tokenrx_core::PatternLibrary;

use crate::commands::load_pattern_library;

pub struct PatternsOptions {
    pub patterns_path: Option<PathBuf>,
    pub json: bool,
}

pub fn run_patterns(opts: PatternsOptions) -> Result<()> {
    let library = load_pattern_library(opts.patterns_path.as_deref())?;
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    if opts.json {
        let rendered = serde_json::to_string_pretty(&library).context("Failed to serialize named patterns")?;
        writeln!(writer, "{}", rendered)?;
    } else {
        writeln!(writer, "{}", build_patterns_table(&library))?;
    }
    Ok(())
}

pub fn build_patterns_table(library: &PatternLibrary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Pattern", "Flags", "Description"]);
    for entry in &library.patterns {
        table.add_row(vec![
            entry.name.clone(),
            entry.pattern.clone(),
            entry.flags.clone().unwrap_or_default(),
            entry.description.clone().unwrap_or_default(),
        ]);
    }
    table
}
