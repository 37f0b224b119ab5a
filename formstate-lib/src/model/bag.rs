//! Values collected by a combine

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::Display;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::Value;
use crate::error::FieldError;

/// The valid values of the fields passed to a combine, keyed by field.
///
/// Handed to the combiner once every requested field turned out valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bag<K, V> {
    values: BTreeMap<K, V>,
}

impl<K: Ord, V> Bag<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: K, value: V) {
        self.values.insert(key, value);
    }

    /// Returns a reference to the value, if the field was combined.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.values.get(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.values.iter()
    }

    pub fn into_inner(self) -> BTreeMap<K, V> {
        self.values
    }
}

impl<K, V> IntoIterator for Bag<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

// =========================================================================
// Typed getters
//
// Return Err if field is missing or wrong type.
// Return Ok(None) only if the field exists and is Value::Null.
// =========================================================================

impl<K: Ord> Bag<K, Value> {
    fn lookup<Q>(&self, field: &Q) -> Result<&Value, FieldError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        self.values
            .get(field)
            .ok_or_else(|| FieldError::not_combined(field.to_string()))
    }

    /// Gets a string field value.
    pub fn get_string<Q>(&self, field: &Q) -> Result<Option<&str>, FieldError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        match self.lookup(field)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            other => Err(mismatch(field, "string", other)),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool<Q>(&self, field: &Q) -> Result<Option<bool>, FieldError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        match self.lookup(field)? {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            other => Err(mismatch(field, "bool", other)),
        }
    }

    /// Gets an i64 field value.
    pub fn get_long<Q>(&self, field: &Q) -> Result<Option<i64>, FieldError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        match self.lookup(field)? {
            Value::Null => Ok(None),
            Value::Long(n) => Ok(Some(*n)),
            other => Err(mismatch(field, "long", other)),
        }
    }

    /// Gets an f64 field value.
    pub fn get_float<Q>(&self, field: &Q) -> Result<Option<f64>, FieldError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        match self.lookup(field)? {
            Value::Null => Ok(None),
            Value::Float(n) => Ok(Some(*n)),
            Value::Long(n) => Ok(Some(*n as f64)), // Allow widening
            other => Err(mismatch(field, "float", other)),
        }
    }

    /// Gets a Decimal field value.
    pub fn get_decimal<Q>(&self, field: &Q) -> Result<Option<Decimal>, FieldError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        match self.lookup(field)? {
            Value::Null => Ok(None),
            Value::Decimal(d) => Ok(Some(*d)),
            other => Err(mismatch(field, "decimal", other)),
        }
    }

    /// Gets a list field value.
    pub fn get_list<Q>(&self, field: &Q) -> Result<Option<&[Value]>, FieldError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        match self.lookup(field)? {
            Value::Null => Ok(None),
            Value::List(items) => Ok(Some(items.as_slice())),
            other => Err(mismatch(field, "list", other)),
        }
    }
}

fn mismatch<Q: Display + ?Sized>(field: &Q, expected: &'static str, actual: &Value) -> FieldError {
    FieldError::wrong_type(field.to_string(), expected, actual.type_name())
}
