//! Display implementation for Value

use std::fmt;

use super::{Value, ValueTag};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "string: {}", s),
            Value::Int(n) => write!(f, "int: {}", n),
            Value::Float(n) => write!(f, "float: {}", n),
            Value::Bool(b) => write!(f, "bool: {}", b),
            // No payload, no separator
            Value::Untyped => write!(f, "untyped"),
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
