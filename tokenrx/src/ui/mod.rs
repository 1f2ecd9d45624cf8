//! Terminal output for the tokenrx CLI: status lines, diffs and summaries.

pub mod diff_viewer;
pub mod output_format;
pub mod summary;
