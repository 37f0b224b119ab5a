//! Event-driven transitions

use log::trace;

use super::{Event, Field, Validity};
use crate::validator::Validator;

impl<R, V> Field<R, V> {
    /// Applies one event, returning the replacement field.
    ///
    /// | Event | Raw | Validity |
    /// |---|---|---|
    /// | `OnSubmit`, `OnBlur` | unchanged | always re-checked |
    /// | `OnRelatedChange` | unchanged | re-checked unless `NotValidated` |
    /// | `OnChange(new)` | `new` | re-checked unless `NotValidated` |
    ///
    /// A pristine field therefore never shows an error while the user is
    /// still typing; once it has been checked (usually on blur) every later
    /// change is checked live.
    pub fn validate<F>(self, validator: &F, event: Event<R>) -> Self
    where
        F: Validator<R, V> + ?Sized,
    {
        let event_name = event.name();
        let Field { raw, validity } = self;

        let next = match event {
            Event::OnSubmit | Event::OnBlur => checked(raw, validator),
            Event::OnRelatedChange => match validity {
                Validity::NotValidated => Field { raw, validity },
                _ => checked(raw, validator),
            },
            Event::OnChange(new_raw) => match validity {
                Validity::NotValidated => Field::new(new_raw),
                _ => checked(new_raw, validator),
            },
        };

        trace!("{} -> {}", event_name, next.validity.name());
        next
    }
}

fn checked<R, V, F>(raw: R, validator: &F) -> Field<R, V>
where
    F: Validator<R, V> + ?Sized,
{
    let validity = validator.validate(&raw).into();
    Field { raw, validity }
}

/// Free-function form of [`Field::validate`].
pub fn validate<R, V, F>(field: Field<R, V>, validator: &F, event: Event<R>) -> Field<R, V>
where
    F: Validator<R, V> + ?Sized,
{
    field.validate(validator, event)
}
