// tokenrx/src/ui/diff_viewer.rs
//! Unified diff between the token JSON before and after a run.
//!
//! Removed lines are red, added lines green, context plain.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes a line-oriented diff of `original` against `transformed`.
///
/// Returns the number of changed lines written.
pub fn print_diff<W: Write>(
    original: &str,
    transformed: &str,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<usize> {
    let patch = create_patch(original, transformed);
    let header = "--- Diff Analysis ---";
    if supports_color {
        writeln!(writer, "{}", header.yellow().bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    let mut changed = 0;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changed += 1;
                    let line = format!("- {}", s.trim_end_matches('\n'));
                    if supports_color {
                        writeln!(writer, "{}", line.red())?;
                    } else {
                        writeln!(writer, "{}", line)?;
                    }
                }
                DiffLine::Insert(s) => {
                    changed += 1;
                    let line = format!("+ {}", s.trim_end_matches('\n'));
                    if supports_color {
                        writeln!(writer, "{}", line.green())?;
                    } else {
                        writeln!(writer, "{}", line)?;
                    }
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if changed == 0 {
        writeln!(writer, "No changes detected.")?;
    }
    Ok(changed)
}
