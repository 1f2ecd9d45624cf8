// tokenrx/src/main.rs
//! tokenrx entry point.
//!
//! Parses arguments, configures logging and dispatches to a command.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use tokenrx::cli::{Cli, Commands};
use tokenrx::commands::apply::{run_apply, ApplyOptions};
use tokenrx::commands::check::{run_check, CheckOptions};
use tokenrx::commands::patterns::{run_patterns, PatternsOptions};
use tokenrx::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match cli.command {
        Commands::Apply(cmd) => {
            run_apply(ApplyOptions {
                tokens_path: cmd.tokens,
                rules_path: cmd.rules,
                patterns_path: cmd.patterns,
                output_path: cmd.output,
                diff: cmd.diff,
                no_summary: cmd.no_summary,
                quiet: cli.quiet,
            })?;
        }
        Commands::Check(cmd) => run_check(CheckOptions {
            rules_path: cmd.rules,
            patterns_path: cmd.patterns,
            quiet: cli.quiet,
        })?,
        Commands::Patterns(cmd) => run_patterns(PatternsOptions {
            patterns_path: cmd.patterns,
            json: cmd.json,
        })?,
    }

    Ok(())
}
