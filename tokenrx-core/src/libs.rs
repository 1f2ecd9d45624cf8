// tokenrx-core/src/libs.rs
//! Named-pattern lookup: the capability the normalizer consumes to resolve
//! aliases such as `"whitespace"` into a concrete pattern and flags.
//!
//! The capability is the [`NamedPatternResolver`] trait and is always passed
//! in explicitly. [`PatternLibrary`] is the table-backed implementation,
//! loaded from the embedded defaults and optionally merged with a user file.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::TokenRxError;
use crate::normalizer::{compile_pattern, ResolvedPattern};

/// Resolves alias strings into patterns.
///
/// `Ok(None)` means "not an alias"; the normalizer then treats the string as a
/// literal pattern. `Err` means the lookup itself failed and aborts the run.
pub trait NamedPatternResolver: Send + Sync {
    fn resolve_named_pattern(&self, name: &str) -> Result<Option<ResolvedPattern>, TokenRxError>;
}

/// One entry of a pattern library.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedPattern {
    pub name: String,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NamedPattern {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, flags: &str) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            flags: Some(flags.to_string()).filter(|f| !f.is_empty()),
            description: None,
        }
    }

    pub fn resolved(&self) -> ResolvedPattern {
        ResolvedPattern::new(self.pattern.clone(), self.flags.clone().unwrap_or_default())
    }
}

/// A table of named patterns.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct PatternLibrary {
    pub patterns: Vec<NamedPattern>,
}

impl PatternLibrary {
    pub fn new(patterns: Vec<NamedPattern>) -> Self {
        Self { patterns }
    }

    /// Loads the built-in library embedded in the crate.
    pub fn load_builtin() -> Result<Self, TokenRxError> {
        debug!("Loading built-in named patterns from embedded string...");
        let builtin_yaml = include_str!("../config/named_patterns.yaml");
        let library: PatternLibrary = serde_yml::from_str(builtin_yaml).map_err(|e| {
            TokenRxError::Configuration(format!("Failed to parse built-in named patterns: {}", e))
        })?;
        debug!("Loaded {} built-in named patterns.", library.patterns.len());
        Ok(library)
    }

    /// Loads a user library from a YAML file and validates every entry.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TokenRxError> {
        let path = path.as_ref();
        info!("Loading named patterns from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let library: PatternLibrary = serde_yml::from_str(&text).map_err(|e| {
            TokenRxError::Configuration(format!(
                "Failed to parse named patterns {}: {}",
                path.display(),
                e
            ))
        })?;
        validate_library(&library)?;
        info!("Loaded {} named patterns from file {}.", library.patterns.len(), path.display());
        Ok(library)
    }

    pub fn get(&self, name: &str) -> Option<&NamedPattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl NamedPatternResolver for PatternLibrary {
    fn resolve_named_pattern(&self, name: &str) -> Result<Option<ResolvedPattern>, TokenRxError> {
        Ok(self.get(name).map(NamedPattern::resolved))
    }
}

/// Merges a user library over the defaults. User entries replace defaults of
/// the same name in place; new names are appended in their file order.
pub fn merge_libraries(default: PatternLibrary, user: Option<PatternLibrary>) -> PatternLibrary {
    let mut merged = default.patterns;
    if let Some(user) = user {
        debug!("Merging {} user named patterns.", user.patterns.len());
        for entry in user.patterns {
            match merged.iter_mut().find(|p| p.name == entry.name) {
                Some(existing) => {
                    debug!("Overriding built-in named pattern '{}'.", entry.name);
                    *existing = entry;
                }
                None => merged.push(entry),
            }
        }
    }
    PatternLibrary { patterns: merged }
}

/// Rejects empty or duplicate names and entries that do not compile.
pub fn validate_library(library: &PatternLibrary) -> Result<(), TokenRxError> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for entry in &library.patterns {
        if entry.name.is_empty() {
            errors.push("A named pattern has an empty `name` field.".to_string());
        } else if !names.insert(entry.name.as_str()) {
            errors.push(format!("Duplicate named pattern found: '{}'.", entry.name));
        }
        if let Err(e) = compile_pattern(&entry.resolved()) {
            errors.push(format!("Named pattern '{}': {}", entry.name, e));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TokenRxError::Configuration(format!(
            "Named pattern validation failed:\n{}",
            errors.join("\n")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_library_is_valid() {
        let library = PatternLibrary::load_builtin().unwrap();
        assert!(!library.is_empty());
        validate_library(&library).unwrap();
        let ws = library.get("whitespace").unwrap();
        assert_eq!(ws.flags.as_deref(), Some("g"));
    }

    #[test]
    fn test_unknown_name_is_not_an_error() {
        let library = PatternLibrary::load_builtin().unwrap();
        assert_eq!(library.resolve_named_pattern("space").unwrap(), None);
    }

    #[test]
    fn test_merge_overrides_in_place_and_appends() {
        let default = PatternLibrary::new(vec![
            NamedPattern::new("a", "x", ""),
            NamedPattern::new("b", "y", "g"),
        ]);
        let user = PatternLibrary::new(vec![
            NamedPattern::new("b", "z", "gi"),
            NamedPattern::new("c", "w", ""),
        ]);
        let merged = merge_libraries(default, Some(user));
        let names: Vec<&str> = merged.patterns.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(merged.get("b").unwrap().pattern, "z");
    }

    #[test]
    fn test_validation_collects_all_problems() {
        let library = PatternLibrary::new(vec![
            NamedPattern::new("", "x", ""),
            NamedPattern::new("dup", "x", ""),
            NamedPattern::new("dup", "(", ""),
        ]);
        let message = validate_library(&library).unwrap_err().to_string();
        assert!(message.contains("empty `name`"));
        assert!(message.contains("Duplicate named pattern found: 'dup'"));
        assert!(message.contains("Named pattern 'dup'"));
    }
}
