//! Literal values carried by `Constant` nodes

mod display;

use std::sync::Arc;

/// A literal value.
///
/// The set of variants is closed. `Untyped` carries no payload and marks a
/// constant whose type the front end has not determined.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// String literal
    String(Arc<str>),

    /// Integer literal
    Int(i64),

    /// Floating point literal
    Float(f64),

    /// Boolean literal: `true` or `false`
    Bool(bool),

    /// No type information
    #[default]
    Untyped,
}

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueTag {
    /// `Value::String`
    String,
    /// `Value::Int`
    Int,
    /// `Value::Float`
    Float,
    /// `Value::Bool`
    Bool,
    /// `Value::Untyped`
    Untyped,
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    /// The payload-less untyped value.
    pub fn untyped() -> Self {
        Value::Untyped
    }

    /// The discriminant of this value.
    pub fn tag(&self) -> ValueTag {
        match self {
            Value::String(_) => ValueTag::String,
            Value::Int(_) => ValueTag::Int,
            Value::Float(_) => ValueTag::Float,
            Value::Bool(_) => ValueTag::Bool,
            Value::Untyped => ValueTag::Untyped,
        }
    }

    /// Render the value in its tagged display form, e.g. `int: 42`.
    ///
    /// Equivalent to `self.to_string()`.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Borrow the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for `Value::Untyped`.
    pub fn is_untyped(&self) -> bool {
        matches!(self, Value::Untyped)
    }
}

impl ValueTag {
    /// Lowercase name used as the display prefix.
    pub fn name(self) -> &'static str {
        match self {
            ValueTag::String => "string",
            ValueTag::Int => "int",
            ValueTag::Float => "float",
            ValueTag::Bool => "bool",
            ValueTag::Untyped => "untyped",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_matches_variant() {
        assert_eq!(Value::from("a").tag(), ValueTag::String);
        assert_eq!(Value::from(1).tag(), ValueTag::Int);
        assert_eq!(Value::from(1.5).tag(), ValueTag::Float);
        assert_eq!(Value::from(true).tag(), ValueTag::Bool);
        assert_eq!(Value::untyped().tag(), ValueTag::Untyped);
    }

    #[test]
    fn test_default_is_untyped() {
        assert!(Value::default().is_untyped());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Value::string("hi").as_str(), Some("hi"));
        assert_eq!(Value::Int(3).as_str(), None);
    }

    #[test]
    fn test_i32_widens() {
        assert_eq!(Value::from(-7i32), Value::Int(-7));
    }
}
