//! Command implementations for the tokenrx CLI.

pub mod apply;
pub mod check;
pub mod patterns;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::io;
use std::path::Path;
use tokenrx_core::{merge_libraries, PatternLibrary};

use crate::ui::output_format;

/// Loads the built-in pattern library, merged with a user file when given.
pub fn load_pattern_library(user_path: Option<&Path>) -> Result<PatternLibrary> {
    let builtin = PatternLibrary::load_builtin().context("Failed to load built-in named patterns")?;
    let user = match user_path {
        Some(path) => Some(
            PatternLibrary::load_from_file(path)
                .with_context(|| format!("Failed to load named patterns from {}", path.display()))?,
        ),
        None => None,
    };
    Ok(merge_libraries(builtin, user))
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}
