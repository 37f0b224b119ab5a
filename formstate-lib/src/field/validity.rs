//! Tri-state validity of a field

use serde::{Deserialize, Serialize};

use super::Errors;
use crate::validator::Outcome;

/// Result of the last check run on a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Validity<V> {
    /// No check has run since the field was created or last reset.
    #[default]
    NotValidated,
    /// The last check succeeded with the validator's parsed value.
    Valid(V),
    /// The last check failed.
    Invalid(Errors),
}

impl<V> Validity<V> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Validity::Invalid(_))
    }

    pub fn is_not_validated(&self) -> bool {
        matches!(self, Validity::NotValidated)
    }

    /// Returns the validated value, if valid.
    pub fn value(&self) -> Option<&V> {
        match self {
            Validity::Valid(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the errors, if invalid.
    pub fn error(&self) -> Option<&Errors> {
        match self {
            Validity::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns the state name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Validity::NotValidated => "not_validated",
            Validity::Valid(_) => "valid",
            Validity::Invalid(_) => "invalid",
        }
    }
}

impl<V> From<Outcome<V>> for Validity<V> {
    fn from(outcome: Outcome<V>) -> Self {
        match outcome {
            Ok(value) => Validity::Valid(value),
            Err(errors) => Validity::Invalid(errors),
        }
    }
}
