// tokenrx/src/ui/summary.rs
//! Change summary table printed after `apply`.

use comfy_table::Table;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use tokenrx_core::TransformReport;

/// Builds the summary table: one row per rule and key that changed something.
pub fn build_summary_table(reports: &[TransformReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Key", "Fields changed"]);
    for report in reports {
        for item in report.summary() {
            table.add_row(vec![
                report.rule.clone(),
                item.key,
                item.occurrences.to_string(),
            ]);
        }
    }
    table
}

pub fn print_summary<W: Write>(
    reports: &[TransformReport],
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let total: usize = reports.iter().map(|r| r.changes.len()).sum();
    let title = "--- Change Summary ---";
    if supports_color {
        writeln!(writer, "{}", title.yellow().bold())?;
    } else {
        writeln!(writer, "{}", title)?;
    }

    if total == 0 {
        writeln!(writer, "No fields changed.")?;
        return Ok(());
    }

    writeln!(writer, "{}", build_summary_table(reports))?;
    writeln!(writer, "Total fields changed: {}", total)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenrx_core::FieldChange;

    #[test]
    fn test_summary_lists_rule_and_key() {
        let report = TransformReport {
            rule: "dashes".to_string(),
            tokens_seen: 1,
            changes: vec![FieldChange {
                token_id: "1".to_string(),
                key: "name".to_string(),
                before: "a b".to_string(),
                after: "a-b".to_string(),
            }],
        };
        let mut buf = Vec::new();
        print_summary(&[report], &mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("dashes"));
        assert!(text.contains("name"));
        assert!(text.contains("Total fields changed: 1"));
    }

    #[test]
    fn test_empty_summary() {
        let mut buf = Vec::new();
        print_summary(&[TransformReport::new("noop")], &mut buf, false).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("No fields changed."));
    }
}
