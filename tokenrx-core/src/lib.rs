// tokenrx-core/src/lib.rs
//! # tokenrx Core Library
//!
//! `tokenrx-core` rewrites named string fields on collections of token records
//! with declarative regex rules. A rule names the fields to target, a pattern
//! (a literal, an alias from a pattern library, or an explicit pattern with
//! flags), a literal replacement and an optional trim.
//!
//! The library is pure and stateless: it performs no I/O during a transform,
//! never mutates its inputs, and reports every failure as a returned value.
//!
//! ## Modules
//!
//! * `config`: Defines `ReplaceStringRule`, `RegexSpec` and `RuleSet`, and loads rule files.
//! * `libs`: The `NamedPatternResolver` capability and the table-backed `PatternLibrary`.
//! * `normalizer`: Resolves a rule's pattern and compiles it once.
//! * `engine`: Defines the `TransformEngine` trait.
//! * `engines`: Concrete engines, currently `ReplaceStringEngine`.
//! * `headless`: One-shot convenience functions.
//! * `report`: Records of which fields changed.
//! * `token`: The `Token` record.
//!
//! ## Usage Example
//!
//! ```rust
//! use tokenrx_core::{replace_string, PatternLibrary, RegexSpec, ReplaceStringRule, Token};
//!
//! let tokens = vec![Token::new("1").with_field("name", "Brand Primary Blue")];
//! let rule = ReplaceStringRule::new(["name"], RegexSpec::structured(" ", Some("g")))
//!     .with_replace_by("-");
//! let libs = PatternLibrary::load_builtin().unwrap();
//!
//! let output = replace_string(&tokens, &rule, &libs).unwrap();
//! assert_eq!(output[0].str_field("name"), Some("Brand-Primary-Blue"));
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`TokenRxError`]; [`TokenRxError::kind`] tells
//! an invalid pattern apart from a failed named-pattern lookup.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod libs;
pub mod normalizer;
pub mod report;
pub mod token;

/// Re-exports rule types and rule-file loading.
pub use config::{validate_rules, RegexSpec, ReplaceStringRule, RuleSet};

/// Re-exports the error type and its classification.
pub use errors::{FailureKind, TokenRxError};

pub use engine::TransformEngine;
pub use engines::replace_string::ReplaceStringEngine;

/// Re-exports the named-pattern capability and its table-backed implementation.
pub use libs::{merge_libraries, validate_library, NamedPattern, NamedPatternResolver, PatternLibrary};

pub use normalizer::{
    compile_pattern, normalize, resolve_spec, CompiledExpression, PatternSource, RegexFlags,
    ResolvedPattern,
};

pub use report::{ChangeSummaryItem, FieldChange, TransformReport};

pub use headless::{apply_rules, apply_rules_with_report, build_engines, replace_string};

pub use token::{tokens_from_json, Token, ID_KEY};
