//! Parsed value types.
//!
//! The result domain of a parse: strings, unsigned integers, ordered
//! objects, and arrays. Objects keep their entries in parse order
//! (first-occurrence position, last write wins on duplicate keys).

use std::fmt;

use indexmap::IndexMap;

/// A parsed JUDO value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Double-quoted string literal. No escape sequences exist in the
    /// notation, so the text is exactly what appeared between the quotes.
    String(String),

    /// Unsigned decimal integer: `0`, `42`, `123`.
    Number(u64),

    /// Object: `{ "key": value, ... }`, entries in parse order.
    Object(IndexMap<String, Value>),

    /// Array: `[ value, ... ]`, elements in parse order.
    Array(Vec<Value>),
}

impl Value {
    /// Name of this value's type, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Number(_) => "Number",
            Value::Object(_) => "Object",
            Value::Array(_) => "Array",
        }
    }

    /// Try to get as string text.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as integer.
    #[inline]
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as object entries.
    #[inline]
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Try to get as array elements.
    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Check if this is an object.
    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Check if this is an array.
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Look up an object entry by key. `None` for non-objects and missing
    /// keys alike.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    /// Number of entries (object) or elements (array); `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Object(entries) => Some(entries.len()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }
}

/// Canonical textual form.
///
/// Writes the value back in the notation it was parsed from: quoted strings
/// (verbatim, no escapes), bare integers, `{"key": value, ...}` objects and
/// `[value, ...]` arrays with entries in stored order. Feeding the output
/// back through the parser reproduces the value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Number(n) => write!(f, "{n}"),
            Value::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "\"{key}\": {value}")?;
                }
                f.write_str("}")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}
