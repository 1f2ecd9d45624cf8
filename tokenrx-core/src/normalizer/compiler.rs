//! compiler.rs - Resolves a rule's [`RegexSpec`] and compiles it.
//!
//! Resolution turns the three accepted shapes of a rule's `regex` field into a
//! single [`ResolvedPattern`]. Compilation turns that into a
//! [`CompiledExpression`], which is what the field transformer runs.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{NoExpand, Regex, RegexBuilder};
use std::borrow::Cow;

use crate::config::RegexSpec;
use crate::errors::TokenRxError;
use crate::libs::NamedPatternResolver;
use crate::normalizer::dialect::translate;
use crate::normalizer::flags::RegexFlags;

/// Upper bound on the compiled program size of a single rule.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A pattern source paired with its raw flag string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResolvedPattern {
    pub pattern: String,
    pub flags: String,
}

impl ResolvedPattern {
    pub fn new(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            flags: flags.into(),
        }
    }
}

/// Where a [`ResolvedPattern`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSource {
    /// A string that named no library entry, used as the pattern itself.
    Literal,
    /// A string resolved through the pattern library.
    Alias(String),
    /// An explicit `{ pattern, flags }` object.
    Structured,
}

/// Resolves a [`RegexSpec`] against a pattern library.
///
/// A bare string is first looked up as an alias. When the library does not
/// know it, the string falls back to being a literal pattern with no flags.
/// A failing lookup is propagated rather than treated as "not found".
pub fn resolve_spec<L>(
    spec: &RegexSpec,
    libs: &L,
) -> Result<(ResolvedPattern, PatternSource), TokenRxError>
where
    L: NamedPatternResolver + ?Sized,
{
    match spec {
        RegexSpec::Text(text) => match libs.resolve_named_pattern(text)? {
            Some(resolved) => {
                debug!("Resolved named pattern '{}' to /{}/{}", text, resolved.pattern, resolved.flags);
                Ok((resolved, PatternSource::Alias(text.clone())))
            }
            None => {
                debug!("'{}' is not a named pattern; using it as a literal pattern.", text);
                Ok((ResolvedPattern::new(text.clone(), ""), PatternSource::Literal))
            }
        },
        RegexSpec::Structured { pattern, flags } => Ok((
            ResolvedPattern::new(pattern.clone(), flags.clone().unwrap_or_default()),
            PatternSource::Structured,
        )),
    }
}

/// A resolved pattern ready to run.
///
/// An empty pattern compiles to no regex at all, so substitution is the
/// identity.
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    regex: Option<Regex>,
    flags: RegexFlags,
    source: ResolvedPattern,
}

impl CompiledExpression {
    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    pub fn source(&self) -> &ResolvedPattern {
        &self.source
    }

    /// True when the expression can never change a value.
    pub fn is_identity(&self) -> bool {
        self.regex.is_none()
    }

    /// Substitutes `replacement` verbatim for the first match, or for every
    /// match when the `g` flag is set.
    pub fn replace<'h>(&self, haystack: &'h str, replacement: &str) -> Cow<'h, str> {
        match &self.regex {
            None => Cow::Borrowed(haystack),
            Some(regex) if self.flags.global => regex.replace_all(haystack, NoExpand(replacement)),
            Some(regex) => regex.replace(haystack, NoExpand(replacement)),
        }
    }
}

/// Compiles a resolved pattern and its flags.
pub fn compile_pattern(resolved: &ResolvedPattern) -> Result<CompiledExpression, TokenRxError> {
    let flags: RegexFlags = resolved.flags.parse()?;

    if resolved.pattern.is_empty() {
        debug!(
            target: "tokenrx_core::normalizer",
            "Empty pattern; expression is the identity."
        );
        return Ok(CompiledExpression {
            regex: None,
            flags,
            source: resolved.clone(),
        });
    }

    let translated = translate(&resolved.pattern, flags);
    if translated != resolved.pattern {
        debug!(
            target: "tokenrx_core::normalizer",
            "Rewrote /{}/ as /{}/ for compilation.",
            resolved.pattern,
            translated
        );
    }

    let regex = RegexBuilder::new(&translated)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .crlf(flags.multi_line)
        .dot_matches_new_line(flags.dot_matches_new_line)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|source| TokenRxError::InvalidPattern {
            pattern: resolved.pattern.clone(),
            source,
        })?;

    debug!(
        target: "tokenrx_core::normalizer",
        "Compiled /{}/{} successfully.",
        resolved.pattern,
        flags
    );

    Ok(CompiledExpression {
        regex: Some(regex),
        flags,
        source: resolved.clone(),
    })
}

/// Resolves and compiles a rule's pattern in one step.
pub fn normalize<L>(spec: &RegexSpec, libs: &L) -> Result<CompiledExpression, TokenRxError>
where
    L: NamedPatternResolver + ?Sized,
{
    let (resolved, _) = resolve_spec(spec, libs)?;
    compile_pattern(&resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureKind;
    use crate::libs::{NamedPattern, PatternLibrary};

    struct FailingResolver;

    impl NamedPatternResolver for FailingResolver {
        fn resolve_named_pattern(&self, name: &str) -> Result<Option<ResolvedPattern>, TokenRxError> {
            Err(TokenRxError::ResolutionError {
                name: name.to_string(),
                reason: "library unavailable".to_string(),
            })
        }
    }

    fn library() -> PatternLibrary {
        PatternLibrary::new(vec![NamedPattern::new("space", "space", "g")])
    }

    #[test]
    fn test_text_spec_resolves_alias() {
        let (resolved, source) = resolve_spec(&RegexSpec::from("space"), &library()).unwrap();
        assert_eq!(resolved, ResolvedPattern::new("space", "g"));
        assert_eq!(source, PatternSource::Alias("space".to_string()));
    }

    #[test]
    fn test_text_spec_falls_back_to_literal() {
        let (resolved, source) = resolve_spec(&RegexSpec::from("a+b"), &library()).unwrap();
        assert_eq!(resolved, ResolvedPattern::new("a+b", ""));
        assert_eq!(source, PatternSource::Literal);
    }

    #[test]
    fn test_structured_spec_skips_library() {
        let spec = RegexSpec::structured("space", None);
        let (resolved, source) = resolve_spec(&spec, &FailingResolver).unwrap();
        assert_eq!(resolved, ResolvedPattern::new("space", ""));
        assert_eq!(source, PatternSource::Structured);
    }

    #[test]
    fn test_resolution_failure_propagates() {
        let err = normalize(&RegexSpec::from("space"), &FailingResolver).unwrap_err();
        assert_eq!(err.kind(), FailureKind::ResolutionError);
    }

    #[test]
    fn test_first_match_without_global() {
        let expr = compile_pattern(&ResolvedPattern::new(" ", "")).unwrap();
        assert_eq!(expr.replace("a b c", "-"), "a-b c");
    }

    #[test]
    fn test_all_matches_with_global() {
        let expr = compile_pattern(&ResolvedPattern::new(" ", "g")).unwrap();
        assert_eq!(expr.replace("a b c", "-"), "a-b-c");
    }

    #[test]
    fn test_case_insensitive_flag() {
        let expr = compile_pattern(&ResolvedPattern::new("space", "gi")).unwrap();
        assert_eq!(expr.replace("Space and SPACE", "x"), "x and x");
    }

    #[test]
    fn test_replacement_is_literal() {
        let expr = compile_pattern(&ResolvedPattern::new("(a)", "")).unwrap();
        assert_eq!(expr.replace("abc", "$1$1"), "$1$1bc");
    }

    #[test]
    fn test_escaped_slash_pattern() {
        let expr = compile_pattern(&ResolvedPattern::new(r"(.*?)\/", "")).unwrap();
        assert_eq!(expr.replace("Colors / Brand / Primary", ""), " Brand / Primary");
    }

    #[test]
    fn test_empty_pattern_is_identity() {
        let expr = compile_pattern(&ResolvedPattern::new("", "g")).unwrap();
        assert!(expr.is_identity());
        assert!(matches!(expr.replace("abc", "nothing"), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = compile_pattern(&ResolvedPattern::new("(unclosed", "")).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidPattern);
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_multi_line_flag_anchors_each_line() {
        let plain = compile_pattern(&ResolvedPattern::new("^a", "g")).unwrap();
        let multi = compile_pattern(&ResolvedPattern::new("^a", "gm")).unwrap();
        assert_eq!(plain.replace("a\na", "x"), "x\na");
        assert_eq!(multi.replace("a\na", "x"), "x\nx");
        assert_eq!(multi.replace("a\r\na", "x"), "x\r\nx");
    }

    #[test]
    fn test_dot_all_flag_crosses_newlines() {
        let plain = compile_pattern(&ResolvedPattern::new("a.b", "")).unwrap();
        let dot_all = compile_pattern(&ResolvedPattern::new("a.b", "s")).unwrap();
        assert_eq!(plain.replace("a\nb", "x"), "a\nb");
        assert_eq!(dot_all.replace("a\nb", "x"), "x");
    }

    #[test]
    fn test_dot_stops_at_carriage_return() {
        let plain = compile_pattern(&ResolvedPattern::new(r"(.*?)\/", "")).unwrap();
        let dot_all = compile_pattern(&ResolvedPattern::new(r"(.*?)\/", "s")).unwrap();
        assert_eq!(plain.replace("a\rb/c", ""), "a\rc");
        assert_eq!(dot_all.replace("a\rb/c", ""), "c");
    }

    #[test]
    fn test_word_and_digit_classes_are_ascii() {
        let word = compile_pattern(&ResolvedPattern::new(r"\w+", "g")).unwrap();
        assert_eq!(word.replace("Café", ""), "é");

        let digits = compile_pattern(&ResolvedPattern::new(r"\d+", "g")).unwrap();
        assert_eq!(digits.replace("\u{663}px", ""), "\u{663}px");
        assert_eq!(digits.replace("12px", ""), "px");

        let boundary = compile_pattern(&ResolvedPattern::new(r"\bx", "g")).unwrap();
        assert_eq!(boundary.replace("éx x", "-"), "é- -");
    }

    #[test]
    fn test_whitespace_class_includes_byte_order_mark() {
        let expr = compile_pattern(&ResolvedPattern::new(r"\s+", "g")).unwrap();
        assert_eq!(expr.replace("a\u{feff}b c", "-"), "a-b-c");
    }

    #[test]
    fn test_source_keeps_original_pattern() {
        let expr = compile_pattern(&ResolvedPattern::new(r"\d+", "g")).unwrap();
        assert_eq!(expr.source().pattern, r"\d+");
    }

    #[test]
    fn test_invalid_flags_on_empty_pattern() {
        let err = compile_pattern(&ResolvedPattern::new("", "q")).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidPattern);
    }
}
