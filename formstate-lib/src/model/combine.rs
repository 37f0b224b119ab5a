//! Combining fields for submission

use std::borrow::Borrow;
use std::fmt::Display;

use log::debug;

use super::{Bag, Model};
use crate::error::{FieldNotValid, ModelError, SubmitError};
use crate::field::Validity;
use crate::validator::Outcome;

impl<K: Ord + Clone, R, V: Clone> Model<K, R, V> {
    /// Folds the fields named by `keys`, in order, into one value.
    ///
    /// Each valid field's value is collected into a [`Bag`]. The first field
    /// that is not valid stops the fold and is reported as
    /// `"<key> field isn't valid."`; fields after it are not inspected. When
    /// every field is valid the bag is handed to `combiner`.
    ///
    /// The outer `Result` fails only for a key that is not in the model.
    pub fn combine<'a, Q, I, C, T>(
        &self,
        keys: I,
        combiner: C,
    ) -> Result<Result<T, FieldNotValid<K>>, ModelError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
        C: FnOnce(Bag<K, V>) -> T,
    {
        let mut bag = Bag::new();
        for key in keys {
            let (stored, field) = self
                .fields
                .get_key_value(key)
                .ok_or_else(|| ModelError::key_not_found(key))?;
            match field.validity() {
                Validity::Valid(value) => bag.insert(stored.clone(), value.clone()),
                Validity::NotValidated => {
                    return Ok(Err(FieldNotValid::not_validated(stored.clone())));
                }
                Validity::Invalid(errors) => {
                    return Ok(Err(FieldNotValid::invalid(stored.clone(), errors.clone())));
                }
            }
        }
        Ok(Ok(combiner(bag)))
    }

    /// Combines the fields named by `keys` and hands them to `combiner` for a
    /// final decision.
    ///
    /// Fails with [`SubmitError::NotValidated`] for a field the user never
    /// interacted with, [`SubmitError::Invalid`] for a field whose check
    /// failed, and [`SubmitError::Rejected`] when the combiner itself fails
    /// (e.g. a last cross-field check).
    ///
    /// # Example
    ///
    /// ```
    /// use formstate_lib::Value;
    /// use formstate_lib::field::Field;
    /// use formstate_lib::model::Model;
    ///
    /// let model: Model = Model::new()
    ///     .with_field("name", Field::pre_validated(Value::from("Bob"), Clone::clone));
    ///
    /// let submitted = model.submit_if_valid(["name"], |bag| Ok(bag.into_inner()))?;
    /// assert_eq!(submitted.unwrap()["name"], Value::from("Bob"));
    /// # Ok::<(), formstate_lib::error::ModelError>(())
    /// ```
    pub fn submit_if_valid<'a, Q, I, C, T>(
        &self,
        keys: I,
        combiner: C,
    ) -> Result<Result<T, SubmitError<K>>, ModelError>
    where
        K: Borrow<Q> + Display,
        Q: Ord + Display + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
        C: FnOnce(Bag<K, V>) -> Outcome<T>,
    {
        let verdict = match self.combine(keys, combiner)? {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(errors)) => Err(SubmitError::Rejected(errors)),
            Err(not_valid) => Err(SubmitError::from(not_valid)),
        };

        match &verdict {
            Ok(_) => debug!("submit accepted"),
            Err(error) => debug!("submit blocked: {}", error),
        }
        Ok(verdict)
    }
}
