//! Composable text rules

use std::fmt;
use std::sync::Arc;

use super::{AsText, Outcome, Validator};
use crate::Value;
use crate::field::Errors;

/// Message used when a text rule is applied to an input that is not text.
const NOT_TEXT: &str = "expected a text value";

type Check<T> = Arc<dyn Fn(&str) -> Outcome<T> + Send + Sync>;

/// A cloneable validator over text inputs.
///
/// A `Rule` validates any raw type implementing [`AsText`], so the same rule
/// works for `String` fields and for [`Value`] fields of a dynamic model.
/// Built-in rules live in [`rules`](super::rules).
pub struct Rule<T> {
    run: Check<T>,
}

impl<T> Rule<T> {
    /// Creates a rule from a check over the input text.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str) -> Outcome<T> + Send + Sync + 'static,
    {
        Self {
            run: Arc::new(check),
        }
    }
}

impl<T: 'static> Rule<T> {
    /// Transforms the validated value.
    pub fn map<U, F>(self, f: F) -> Rule<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Rule::new(move |text| (self.run)(text).map(&f))
    }

    /// Adds a condition on the validated value.
    pub fn check<F>(self, predicate: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        Rule::new(move |text| {
            let value = (self.run)(text)?;
            if predicate(&value) {
                Ok(value)
            } else {
                Err(Errors::One(msg.clone()))
            }
        })
    }

    /// Requires the validated value to lie in `min..=max`.
    pub fn in_range(self, min: T, max: T, msg: impl Into<String>) -> Self
    where
        T: PartialOrd + Send + Sync,
    {
        self.check(move |value| *value >= min && *value <= max, msg)
    }

    /// Accepts empty input as `None`, see [`optional`](super::optional).
    pub fn optional(self) -> Rule<Option<T>> {
        Rule::new(move |text| {
            if text.is_empty() {
                Ok(None)
            } else {
                (self.run)(text).map(Some)
            }
        })
    }

    /// Converts the validated value into a [`Value`] for dynamic models.
    pub fn into_value(self) -> Rule<Value>
    where
        T: Into<Value>,
    {
        self.map(Into::into)
    }
}

impl<R, T> Validator<R, T> for Rule<T>
where
    R: AsText + ?Sized,
{
    fn validate(&self, raw: &R) -> Outcome<T> {
        match raw.as_text() {
            Some(text) => (self.run)(text),
            None => Err(Errors::from(NOT_TEXT)),
        }
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}
