//! Rule normalization for tokenrx.
//!
//! A rule's `regex` field arrives as a literal pattern, a named-pattern alias
//! or a structured `{ pattern, flags }` object. This module resolves it once,
//! against the pattern library the caller passes in, and compiles the result
//! into a [`CompiledExpression`] that is reused for every token.

pub mod compiler;
pub mod dialect;
pub mod flags;

pub use compiler::{
    compile_pattern, normalize, resolve_spec, CompiledExpression, PatternSource, ResolvedPattern,
};
pub use flags::RegexFlags;
