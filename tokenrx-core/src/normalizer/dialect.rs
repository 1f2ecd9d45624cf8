//! dialect.rs - Rewrites pattern sources so shorthand classes keep their
//! ECMAScript meaning when compiled by the `regex` crate.
//!
//! Rule files are commonly written against JavaScript regular expressions,
//! where `\d`, `\w` and `\b` are ASCII-only, `\s` also covers U+FEFF, and `.`
//! stops at every line terminator (`\n`, `\r`, U+2028, U+2029) unless the `s`
//! flag is set. The `regex` crate makes the shorthands Unicode-aware and lets
//! `.` match `\r`, so the source is rewritten before it is built.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use crate::normalizer::flags::RegexFlags;

const ASCII_DIGIT: &str = "0-9";
const ASCII_WORD: &str = "0-9A-Za-z_";
const SPACE: &str = r"\s\x{FEFF}";
const LINE_TERMINATORS: &str = r"\n\r\x{2028}\x{2029}";

/// Returns `pattern` rewritten for the `regex` crate, borrowing it unchanged
/// when nothing needed rewriting.
pub fn translate(pattern: &str, flags: RegexFlags) -> Cow<'_, str> {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut changed = false;
    let mut class_depth = 0usize;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(escaped) = chars.next() else {
                    out.push('\\');
                    break;
                };
                match shorthand(escaped, class_depth > 0) {
                    Some(replacement) => {
                        out.push_str(&replacement);
                        changed = true;
                    }
                    None => {
                        out.push('\\');
                        out.push(escaped);
                    }
                }
            }
            '[' => {
                class_depth += 1;
                out.push('[');
                if chars.peek() == Some(&'^') {
                    chars.next();
                    out.push('^');
                }
                // A `]` right after the opening bracket is a literal.
                if chars.peek() == Some(&']') {
                    chars.next();
                    out.push(']');
                }
            }
            ']' if class_depth > 0 => {
                class_depth -= 1;
                out.push(']');
            }
            '.' if class_depth == 0 && !flags.dot_matches_new_line => {
                out.push_str(&format!("[^{}]", LINE_TERMINATORS));
                changed = true;
            }
            other => out.push(other),
        }
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(pattern)
    }
}

/// Replacement for a shorthand escape, or `None` to keep it as written.
/// Inside a bracket class, positive shorthands expand to bare ranges and
/// negated ones to a nested class.
fn shorthand(escaped: char, in_class: bool) -> Option<String> {
    let replacement = match (escaped, in_class) {
        ('d', false) => format!("[{}]", ASCII_DIGIT),
        ('d', true) => ASCII_DIGIT.to_string(),
        ('D', _) => format!("[^{}]", ASCII_DIGIT),
        ('w', false) => format!("[{}]", ASCII_WORD),
        ('w', true) => ASCII_WORD.to_string(),
        ('W', _) => format!("[^{}]", ASCII_WORD),
        ('s', false) => format!("[{}]", SPACE),
        ('s', true) => SPACE.to_string(),
        ('S', _) => format!("[^{}]", SPACE),
        ('b', false) => r"(?-u:\b)".to_string(),
        ('B', false) => r"(?-u:\B)".to_string(),
        _ => return None,
    };
    Some(replacement)
}
