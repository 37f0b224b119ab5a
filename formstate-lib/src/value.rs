//! Value enum for heterogeneous forms

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use serde::{Deserializer, Serializer};

/// A dynamic value that can hold any raw input or validated field value.
///
/// The default [`Model`](crate::model::Model) uses `Value` for both the raw
/// input and the validated value, so one model can mix text boxes, numeric
/// inputs and checkboxes.
///
/// # Type Mapping
///
/// | Input | Rust Variant |
/// |-------|--------------|
/// | absent / optional and empty | `Null` |
/// | checkbox, switch | `Bool` |
/// | integer | `Long` |
/// | floating point | `Float` |
/// | text box | `String` |
/// | multi-select | `List` |
/// | money, exact quantities | `Decimal` |
///
/// Deserialization is untagged and tries variants in declaration order, so a
/// JSON string always reads back as `String`. Decimals are written as
/// `{"decimal": "19.99"}` to keep them apart from strings and floats.
///
/// # Example
///
/// ```
/// use formstate_lib::Value;
///
/// let name = Value::from("Bob");
/// let age = Value::from(42i64);
/// let newsletter = Value::from(true);
/// let email = Value::from(None::<String>);
/// assert!(email.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Several values, e.g. from a multi-select.
    List(Vec<Value>),
    /// Arbitrary precision decimal.
    Decimal(#[serde(with = "decimal_repr")] Decimal),
}

mod decimal_repr {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Tagged {
        decimal: Decimal,
    }

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        Tagged { decimal: *value }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        Tagged::deserialize(deserializer).map(|tagged| tagged.decimal)
    }
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the text if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Decimal(_) => "decimal",
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Long(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}
