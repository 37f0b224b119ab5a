//! Errors from reading a combined bag

use crate::field::Errors;

/// A combiner asked the [`Bag`](crate::model::Bag) for something it cannot give.
///
/// Converts into [`Errors`], so a combiner can use `?` on the typed getters and
/// its submit is rejected with the message below.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The key was not in the list passed to `combine`.
    #[error("'{key}' was not among the combined keys")]
    NotCombined { key: String },

    /// The valid value has another shape than the getter reads.
    #[error("'{key}' holds a {found} value, not {wanted}")]
    WrongType {
        key: String,
        wanted: &'static str,
        found: &'static str,
    },
}

impl FieldError {
    pub fn not_combined(key: impl Into<String>) -> Self {
        Self::NotCombined { key: key.into() }
    }

    pub fn wrong_type(key: impl Into<String>, wanted: &'static str, found: &'static str) -> Self {
        Self::WrongType {
            key: key.into(),
            wanted,
            found,
        }
    }
}

impl From<FieldError> for Errors {
    fn from(error: FieldError) -> Self {
        Errors::One(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_age() -> Result<i64, Errors> {
        let age: Result<i64, FieldError> = Err(FieldError::wrong_type("age", "long", "string"));
        let age = age?;
        Ok(age)
    }

    #[test]
    fn test_converts_into_combiner_errors() {
        assert_eq!(
            read_age(),
            Err(Errors::from("'age' holds a string value, not long"))
        );
        assert_eq!(
            Errors::from(FieldError::not_combined("email")).to_string(),
            "'email' was not among the combined keys"
        );
    }
}
