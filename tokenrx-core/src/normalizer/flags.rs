//! flags.rs - Parsing of single-letter regex flag strings such as `"gi"`.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use crate::errors::TokenRxError;

/// Decoded regex flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegexFlags {
    /// `g`: replace every match instead of only the first.
    pub global: bool,
    /// `i`
    pub case_insensitive: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` also matches line terminators.
    pub dot_matches_new_line: bool,
    /// `u`: accepted for compatibility; has no effect.
    pub unicode: bool,
    /// `d`: accepted for compatibility; has no effect on substitution.
    pub has_indices: bool,
}

impl FromStr for RegexFlags {
    type Err = TokenRxError;

    fn from_str(flags: &str) -> Result<Self, Self::Err> {
        let mut parsed = RegexFlags::default();
        for c in flags.chars() {
            let slot = match c {
                'g' => &mut parsed.global,
                'i' => &mut parsed.case_insensitive,
                'm' => &mut parsed.multi_line,
                's' => &mut parsed.dot_matches_new_line,
                'u' => &mut parsed.unicode,
                'd' => &mut parsed.has_indices,
                other => {
                    return Err(TokenRxError::InvalidFlags {
                        flags: flags.to_string(),
                        reason: format!("unsupported flag '{}'", other),
                    })
                }
            };
            if *slot {
                return Err(TokenRxError::InvalidFlags {
                    flags: flags.to_string(),
                    reason: format!("flag '{}' given more than once", c),
                });
            }
            *slot = true;
        }
        Ok(parsed)
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = [
            (self.has_indices, 'd'),
            (self.global, 'g'),
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.unicode, 'u'),
        ];
        for (set, c) in pairs {
            if set {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureKind;

    #[test]
    fn test_empty_flags() {
        let flags: RegexFlags = "".parse().unwrap();
        assert_eq!(flags, RegexFlags::default());
    }

    #[test]
    fn test_combined_flags() {
        let flags: RegexFlags = "gim".parse().unwrap();
        assert!(flags.global);
        assert!(flags.case_insensitive);
        assert!(flags.multi_line);
        assert!(!flags.dot_matches_new_line);
        assert_eq!(flags.to_string(), "gim");
    }

    #[test]
    fn test_display_is_canonical_order() {
        let flags: RegexFlags = "sig".parse().unwrap();
        assert_eq!(flags.to_string(), "gis");
    }

    #[test]
    fn test_unsupported_flag() {
        let err = "gy".parse::<RegexFlags>().unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidPattern);
        assert!(err.to_string().contains("unsupported flag 'y'"));
    }

    #[test]
    fn test_repeated_flag() {
        let err = "gg".parse::<RegexFlags>().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
