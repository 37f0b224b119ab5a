//! Event operations on a model

use std::borrow::Borrow;
use std::fmt::Display;

use super::Model;
use crate::error::ModelError;
use crate::field::{Event, Field};
use crate::validator::Validator;

impl<K: Ord + Clone, R: Clone, V: Clone> Model<K, R, V> {
    /// Checks the field when it loses focus.
    pub fn validate_on_blur<Q, F>(&self, key: &Q, validator: &F) -> Result<Self, ModelError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
        F: Validator<R, V> + ?Sized,
    {
        self.apply(key, validator, Event::OnBlur)
    }

    /// Records new raw input, checking it only if the field was checked before.
    pub fn validate_on_change<Q, F>(
        &self,
        key: &Q,
        raw: R,
        validator: &F,
    ) -> Result<Self, ModelError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
        F: Validator<R, V> + ?Sized,
    {
        self.apply(key, validator, Event::OnChange(raw))
    }

    /// Re-checks a dependent field after the field it depends on changed.
    ///
    /// `factory` receives the related field as it currently is (valid or not)
    /// and builds the validator for `key`. Nothing happens if `key` has not
    /// been checked yet.
    pub fn validate_on_related_change<Q, M, F>(
        &self,
        key: &Q,
        related_key: &Q,
        factory: M,
    ) -> Result<Self, ModelError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
        M: FnOnce(&Field<R, V>) -> F,
        F: Validator<R, V>,
    {
        self.field(key)?;
        let validator = factory(self.field(related_key)?);
        self.apply(key, &validator, Event::OnRelatedChange)
    }

    /// Checks the field as part of a submit.
    pub fn validate_on_submit<Q, F>(&self, key: &Q, validator: &F) -> Result<Self, ModelError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
        F: Validator<R, V> + ?Sized,
    {
        self.apply(key, validator, Event::OnSubmit)
    }

    /// Checks a dependent field as part of a submit.
    ///
    /// This overwrites the submit result of `key` using only the validator
    /// built from the related field, so it must run right after
    /// [`validate_on_submit`](Self::validate_on_submit) for the same key.
    pub fn validate_on_related_submit<Q, M, F>(
        &self,
        key: &Q,
        related_key: &Q,
        factory: M,
    ) -> Result<Self, ModelError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
        M: FnOnce(&Field<R, V>) -> F,
        F: Validator<R, V>,
    {
        self.field(key)?;
        let validator = factory(self.field(related_key)?);
        self.validate_on_submit(key, &validator)
    }

    fn apply<Q, F>(&self, key: &Q, validator: &F, event: Event<R>) -> Result<Self, ModelError>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
        F: Validator<R, V> + ?Sized,
    {
        let field = self.field(key)?.clone().validate(validator, event);
        self.replace(key, field)
    }
}
