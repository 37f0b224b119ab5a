//! ModelError for key lookups

use std::fmt::Display;

/// Error type for key lookups on a [`Model`](crate::model::Model).
///
/// An unknown key means the caller wired a field that is not part of the form
/// (a typo'd key or a missing entry). The operation is aborted and the model it
/// was called on is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The requested field does not exist in the model.
    #[error("Field '{key}' not found in model")]
    KeyNotFound { key: String },
}

impl ModelError {
    /// Creates a new key-not-found error.
    pub fn key_not_found(key: impl Display) -> Self {
        Self::KeyNotFound {
            key: key.to_string(),
        }
    }
}
