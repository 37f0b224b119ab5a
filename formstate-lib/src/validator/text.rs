//! Text view of raw inputs

use crate::Value;

/// Raw inputs that can be read as text by [`Rule`](super::Rule)s.
///
/// Returns `None` for inputs that are not text, such as a checkbox value.
pub trait AsText {
    fn as_text(&self) -> Option<&str>;
}

impl AsText for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsText for String {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsText for Value {
    fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Null => Some(""),
            _ => None,
        }
    }
}
