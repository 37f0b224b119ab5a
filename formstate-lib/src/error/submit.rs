//! Combine and submit failures

use std::fmt::Display;

use crate::field::Errors;

/// Why a field stopped a combine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// The user never interacted with the field.
    NotValidated,
    /// The field's last check failed.
    Invalid(Errors),
}

/// The first field in a combine's key list that was not valid.
///
/// Keys after this one are not inspected: combining stops at the first
/// failure instead of collecting every field's errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{key} field isn't valid.")]
pub struct FieldNotValid<K> {
    /// Key of the offending field.
    pub key: K,
    /// State the field was in.
    pub cause: Unresolved,
}

impl<K> FieldNotValid<K> {
    pub fn not_validated(key: K) -> Self {
        Self {
            key,
            cause: Unresolved::NotValidated,
        }
    }

    pub fn invalid(key: K, errors: Errors) -> Self {
        Self {
            key,
            cause: Unresolved::Invalid(errors),
        }
    }
}

/// Failure of [`Model::submit_if_valid`](crate::model::Model::submit_if_valid).
///
/// "Never touched" and "touched and failed" stay distinguishable: the first
/// displays as `Not validated`, the second as `<key> field isn't valid.` and
/// keeps the field's own errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError<K> {
    /// A requested field was still `NotValidated`.
    #[error("Not validated")]
    NotValidated { key: K },

    /// A requested field was `Invalid`.
    #[error("{key} field isn't valid.")]
    Invalid { key: K, errors: Errors },

    /// Every field was valid but the combiner refused the result.
    #[error("{0}")]
    Rejected(Errors),
}

impl<K> SubmitError<K> {
    /// Returns the key of the field that blocked submission, if a field did.
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::NotValidated { key } | Self::Invalid { key, .. } => Some(key),
            Self::Rejected(_) => None,
        }
    }
}

impl<K: Display> SubmitError<K> {
    /// Flattens the failure into the messages shown for the whole form.
    pub fn to_errors(&self) -> Errors {
        match self {
            Self::Rejected(errors) => errors.clone(),
            other => Errors::One(other.to_string()),
        }
    }
}

impl<K> From<FieldNotValid<K>> for SubmitError<K> {
    fn from(error: FieldNotValid<K>) -> Self {
        match error.cause {
            Unresolved::NotValidated => Self::NotValidated { key: error.key },
            Unresolved::Invalid(errors) => Self::Invalid {
                key: error.key,
                errors,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        let not_validated: SubmitError<&str> = FieldNotValid::not_validated("age").into();
        assert_eq!(not_validated.to_string(), "Not validated");

        let invalid: SubmitError<&str> =
            FieldNotValid::invalid("age", Errors::from("must be an integer")).into();
        assert_eq!(invalid.to_string(), "age field isn't valid.");
        assert_eq!(invalid.key(), Some(&"age"));

        let combine = FieldNotValid::not_validated("name");
        assert_eq!(combine.to_string(), "name field isn't valid.");
    }

    #[test]
    fn test_rejected_keeps_combiner_errors() {
        let error: SubmitError<&str> =
            SubmitError::Rejected(Errors::Many(vec!["a".into(), "b".into()]));
        assert_eq!(error.key(), None);
        assert_eq!(
            error.to_errors(),
            Errors::Many(vec!["a".into(), "b".into()])
        );
    }
}
