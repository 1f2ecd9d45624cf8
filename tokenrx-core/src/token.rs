// tokenrx-core/src/token.rs
//! The token record the transform operates on.
//!
//! A token is an `id` plus an open set of named values. Only string values are
//! ever rewritten; everything else is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The name of the identity field. It is never rewritten.
pub const ID_KEY: &str = "id";

/// A single token record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Stable identifier, preserved across every transform.
    pub id: String,
    /// All remaining fields, in source order.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Token {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style helper to attach a field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Looks up a field by key.
    ///
    /// An exact top-level key always wins. Otherwise a key containing `.` is
    /// walked as a path through nested objects.
    pub fn field(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.fields.get(key) {
            return Some(value);
        }
        let mut segments = key.split('.');
        let mut current = self.fields.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Mutable counterpart of [`Token::field`], with the same lookup order.
    pub fn field_mut(&mut self, key: &str) -> Option<&mut Value> {
        if self.fields.contains_key(key) {
            return self.fields.get_mut(key);
        }
        let mut segments = key.split('.');
        let mut current = self.fields.get_mut(segments.next()?)?;
        for segment in segments {
            current = current.as_object_mut()?.get_mut(segment)?;
        }
        Some(current)
    }

    /// Returns the field as a string slice, if present and string-valued.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }
}

/// Parses a JSON array of tokens.
pub fn tokens_from_json(text: &str) -> Result<Vec<Token>, serde_json::Error> {
    serde_json::from_str(text)
}
