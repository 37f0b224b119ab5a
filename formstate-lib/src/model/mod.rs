//! Form model: a named collection of fields.
//!
//! Every operation that applies an event takes `&self` and returns the next
//! model; the model it was called on is never modified. Operations given a
//! key that is not in the model return [`ModelError::KeyNotFound`].

mod bag;
mod combine;
mod events;

pub use bag::*;

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::Value;
use crate::error::ModelError;
use crate::field::{Errors, Field};

/// Mapping from field key to [`Field`].
///
/// The key set is the form's shape and is fixed by the caller when the model
/// is built; event operations replace entries, they never add or remove them.
///
/// # Example
///
/// ```
/// use formstate_lib::Value;
/// use formstate_lib::field::Field;
/// use formstate_lib::model::Model;
/// use formstate_lib::validator::rules;
///
/// let model: Model = Model::new()
///     .with_field("age", Field::new(Value::from("")));
///
/// let age = rules::integer("must be an integer").into_value();
/// let model = model.validate_on_blur("age", &age)?;
/// let model = model.validate_on_change("age", Value::from("42"), &age)?;
/// assert_eq!(model.field("age")?.value(), Some(&Value::Long(42)));
/// # Ok::<(), formstate_lib::error::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Model<K = String, R = Value, V = Value> {
    fields: BTreeMap<K, Field<R, V>>,
}

impl<K: Ord, R, V> Model<K, R, V> {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field (builder pattern).
    pub fn with_field(mut self, key: impl Into<K>, field: Field<R, V>) -> Self {
        self.fields.insert(key.into(), field);
        self
    }

    /// Returns the field for `key`, failing if the key is not in the model.
    pub fn field<Q>(&self, key: &Q) -> Result<&Field<R, V>, ModelError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        self.fields
            .get(key)
            .ok_or_else(|| ModelError::key_not_found(key))
    }

    /// Returns the field for `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&Field<R, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.fields.get(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Field<R, V>)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if every field in the model is valid.
    pub fn all_valid(&self) -> bool {
        self.fields.values().all(Field::is_valid)
    }

    /// Returns every invalid field with its errors, in key order.
    pub fn errors(&self) -> Vec<(&K, &Errors)> {
        self.fields
            .iter()
            .filter_map(|(key, field)| field.error().map(|errors| (key, errors)))
            .collect()
    }
}

impl<K: Ord + Clone, R: Clone, V: Clone> Model<K, R, V> {
    /// Returns a new model with the entry for `key` replaced by `field`.
    pub fn replace<Q>(&self, key: &Q, field: Field<R, V>) -> Result<Self, ModelError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        let mut next = self.clone();
        let slot = next
            .fields
            .get_mut(key)
            .ok_or_else(|| ModelError::key_not_found(key))?;
        *slot = field;
        Ok(next)
    }
}

impl<K: Ord, R, V> Default for Model<K, R, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, R, V> FromIterator<(K, Field<R, V>)> for Model<K, R, V> {
    fn from_iter<I: IntoIterator<Item = (K, Field<R, V>)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model<&'static str, String, i64> {
        Model::new()
            .with_field("a", Field::pre_validated(1, |n: &i64| n.to_string()))
            .with_field("b", Field::invalid("x".to_string(), "bad"))
            .with_field("c", Field::new(String::new()))
    }

    #[test]
    fn test_lookup() {
        let model = model();
        assert_eq!(model.len(), 3);
        assert!(model.contains("a"));
        assert_eq!(model.field("a").unwrap().value(), Some(&1));
        assert_eq!(
            model.field("zz"),
            Err(ModelError::KeyNotFound {
                key: "zz".to_string()
            })
        );
        assert!(model.get("zz").is_none());
    }

    #[test]
    fn test_replace_is_copy_on_write() {
        let before = model();
        let after = before
            .replace("c", Field::pre_validated(3, |n: &i64| n.to_string()))
            .unwrap();

        assert!(before.field("c").unwrap().validity().is_not_validated());
        assert_eq!(after.field("c").unwrap().value(), Some(&3));
        assert_eq!(after.field("a"), before.field("a"));
    }

    #[test]
    fn test_replace_unknown_key_does_not_add() {
        let before = model();
        let result = before.replace("d", Field::new(String::new()));
        assert!(matches!(result, Err(ModelError::KeyNotFound { .. })));
        assert_eq!(before.len(), 3);
    }

    #[test]
    fn test_errors_and_all_valid() {
        let model = model();
        assert!(!model.all_valid());
        assert_eq!(model.errors(), vec![(&"b", &Errors::from("bad"))]);
    }
}
