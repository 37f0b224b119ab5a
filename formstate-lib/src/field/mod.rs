//! Field state machine
//!
//! A [`Field`] pairs the raw input of one control with the [`Validity`] of
//! that input. Fields only change through [`Field::validate`], which applies
//! one [`Event`] and returns the replacement field.

mod errors;
mod event;
mod transition;
mod validity;

pub use errors::*;
pub use event::*;
pub use transition::validate;
pub use validity::*;

use serde::{Deserialize, Serialize};

/// One input control's raw value and current validity.
///
/// `raw` and `validity` are always replaced together.
///
/// # Example
///
/// ```
/// use formstate_lib::field::{Event, Field, Validity};
/// use formstate_lib::validator::Outcome;
///
/// let parse = |raw: &String| -> Outcome<i64> {
///     raw.parse().map_err(|_| "must be an integer".into())
/// };
///
/// let age = Field::new("42".to_string()).validate(&parse, Event::OnBlur);
/// assert_eq!(age.validity(), &Validity::Valid(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field<R, V> {
    raw: R,
    validity: Validity<V>,
}

impl<R, V> Field<R, V> {
    /// Creates a field that has not been checked yet.
    pub fn new(raw: R) -> Self {
        Self {
            raw,
            validity: Validity::NotValidated,
        }
    }

    /// Creates a field that is already valid, rendering its raw input from the value.
    ///
    /// Used to seed trusted defaults.
    pub fn pre_validated(value: V, to_raw: impl FnOnce(&V) -> R) -> Self {
        Self {
            raw: to_raw(&value),
            validity: Validity::Valid(value),
        }
    }

    /// Creates a field that is already invalid.
    pub fn invalid(raw: R, errors: impl Into<Errors>) -> Self {
        Self {
            raw,
            validity: Validity::Invalid(errors.into()),
        }
    }

    /// Marks the field invalid, discarding its previous validity.
    ///
    /// For failures found by the caller, such as a cross-field mismatch.
    pub fn invalidate(self, errors: impl Into<Errors>) -> Self {
        Self::invalid(self.raw, errors)
    }

    /// Returns the raw input exactly as entered.
    pub fn raw(&self) -> &R {
        &self.raw
    }

    pub fn validity(&self) -> &Validity<V> {
        &self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Returns the errors if the field is invalid, `None` otherwise.
    pub fn error(&self) -> Option<&Errors> {
        self.validity.error()
    }

    /// Returns the validated value if the field is valid.
    pub fn value(&self) -> Option<&V> {
        self.validity.value()
    }

    pub fn into_parts(self) -> (R, Validity<V>) {
        (self.raw, self.validity)
    }
}
