//! Validator contract and built-in rules.
//!
//! A validator is any pure function from a raw input to an [`Outcome`]:
//! success carries the parsed value, failure carries one or more messages.
//! Closures and `fn` items implement [`Validator`] directly; [`Rule`] adds a
//! cloneable, composable wrapper for text inputs.
//!
//! # Example
//!
//! ```
//! use formstate_lib::validator::{rules, Validator};
//!
//! let age = rules::integer("must be an integer").in_range(0, 150, "must be between 0 and 150");
//! assert_eq!(age.validate("42"), Ok(42));
//! assert!(age.validate("200").is_err());
//! ```

mod rule;
pub mod rules;
mod text;

pub use rule::Rule;
pub use text::AsText;

use crate::field::Errors;

/// Tagged success/failure returned by validators.
pub type Outcome<V> = Result<V, Errors>;

/// A pure check from a raw input to an [`Outcome`].
///
/// Validators are assumed total: they never panic on any input.
pub trait Validator<R: ?Sized, V> {
    fn validate(&self, raw: &R) -> Outcome<V>;
}

impl<R, V, F> Validator<R, V> for F
where
    R: ?Sized,
    F: Fn(&R) -> Outcome<V>,
{
    fn validate(&self, raw: &R) -> Outcome<V> {
        (self)(raw)
    }
}

/// Wraps a validator so an empty input succeeds with `None`.
///
/// Any non-empty input is handed to the wrapped validator and its value is
/// returned as `Some`.
///
/// ```
/// use formstate_lib::validator::{optional, rules, Validator};
///
/// let phone = optional(rules::integer("digits only"));
/// assert_eq!(phone.validate(""), Ok(None));
/// assert_eq!(phone.validate("5551234"), Ok(Some(5551234)));
/// ```
pub fn optional<F>(validator: F) -> Optional<F> {
    Optional(validator)
}

/// Validator returned by [`optional`].
#[derive(Debug, Clone)]
pub struct Optional<F>(F);

impl<R, V, F> Validator<R, Option<V>> for Optional<F>
where
    R: AsText + ?Sized,
    F: Validator<R, V>,
{
    fn validate(&self, raw: &R) -> Outcome<Option<V>> {
        if raw.as_text().is_some_and(str::is_empty) {
            return Ok(None);
        }
        self.0.validate(raw).map(Some)
    }
}
