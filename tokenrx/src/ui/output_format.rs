//! Status-line helpers shared by every command.
//!
//! Colour is applied only when the caller says the writer supports it.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.green())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg.yellow())
    } else {
        writeln!(writer, "Warning: {}", msg)
    }
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg.red())
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_has_no_escapes() {
        let mut buf = Vec::new();
        print_warn_message(&mut buf, "careful", false).unwrap();
        print_error_message(&mut buf, "broken", false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Warning: careful\nError: broken\n");
    }

    #[test]
    fn test_plain_success_message() {
        let mut buf = Vec::new();
        print_success_message(&mut buf, "All 2 rule(s) normalized.", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "All 2 rule(s) normalized.\n");
    }

    #[test]
    fn test_colored_output_keeps_message() {
        let mut buf = Vec::new();
        print_info_message(&mut buf, "hello", true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("hello"));
        assert!(text.contains('\u{1b}'));
    }
}
