//! This file defines the command-line interface (CLI) for the tokenrx application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "tokenrx",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rewrite string fields of token collections with regex rules",
    long_about = "tokenrx applies declarative replace-string rules to a JSON array of tokens. Each rule selects fields by key, matches them against a regular expression (a literal pattern, a named pattern from the pattern library, or an explicit pattern with flags), substitutes a literal replacement and optionally trims the result.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages and logging.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `tokenrx` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Applies a rule file to a token collection.
    #[command(about = "Applies a rule file to a token collection and prints the result as JSON.")]
    Apply(ApplyCommand),

    /// Normalizes every rule of a rule file without touching any tokens.
    #[command(about = "Checks that every rule in a rule file resolves and compiles.")]
    Check(CheckCommand),

    /// Lists the named patterns available to rules.
    #[command(about = "Lists the named patterns available to rules.")]
    Patterns(PatternsCommand),
}

/// Arguments for the `apply` command.
#[derive(Parser, Debug)]
pub struct ApplyCommand {
    /// Path to a JSON token file (reads from stdin if not provided).
    #[arg(long, short = 't', value_name = "FILE", help = "Read tokens from a JSON file instead of stdin.")]
    pub tokens: Option<PathBuf>,

    /// Path to the rule file (YAML or JSON).
    #[arg(long, short = 'r', value_name = "FILE", help = "Path to the rule file (YAML or JSON).")]
    pub rules: PathBuf,

    /// Extra named patterns merged over the built-in ones.
    #[arg(long, short = 'p', value_name = "FILE", env = "TOKENRX_PATTERNS", help = "Additional named patterns (YAML), merged over the built-in library.")]
    pub patterns: Option<PathBuf>,

    /// Write transformed tokens to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Show a unified diff of the token JSON before and after.
    #[arg(long, short = 'D', help = "Show a unified diff of the changes on stderr.")]
    pub diff: bool,

    /// Suppress the change summary.
    #[arg(long = "no-summary", help = "Suppress the change summary.")]
    pub no_summary: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Path to the rule file (YAML or JSON).
    #[arg(long, short = 'r', value_name = "FILE", help = "Path to the rule file (YAML or JSON).")]
    pub rules: PathBuf,

    /// Extra named patterns merged over the built-in ones.
    #[arg(long, short = 'p', value_name = "FILE", env = "TOKENRX_PATTERNS", help = "Additional named patterns (YAML), merged over the built-in library.")]
    pub patterns: Option<PathBuf>,
}

/// Arguments for the `patterns` command.
#[derive(Parser, Debug)]
pub struct PatternsCommand {
    /// Extra named patterns merged over the built-in ones.
    #[arg(long, short = 'p', value_name = "FILE", env = "TOKENRX_PATTERNS", help = "Additional named patterns (YAML), merged over the built-in library.")]
    pub patterns: Option<PathBuf>,

    /// Print the merged library as JSON.
    #[arg(long = "json", help = "Print the merged library as JSON instead of a table.")]
    pub json: bool,
}
