//! Error messages carried by invalid fields

use std::fmt;

use serde::{Deserialize, Serialize};

/// One validation message or an ordered list of them.
///
/// Validators may produce either shape; every consumer accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Errors {
    /// A single message.
    One(String),
    /// Several messages, in the order they were produced.
    Many(Vec<String>),
}

impl Errors {
    /// Iterates over the messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        let messages: &[String] = match self {
            Errors::One(message) => std::slice::from_ref(message),
            Errors::Many(messages) => messages,
        };
        messages.iter().map(String::as_str)
    }

    /// Returns the first message, if any.
    pub fn first(&self) -> Option<&str> {
        self.messages().next()
    }

    pub fn len(&self) -> usize {
        match self {
            Errors::One(_) => 1,
            Errors::Many(messages) => messages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the messages of `other`, producing a list.
    pub fn merge(self, other: Errors) -> Errors {
        let mut messages = self.into_vec();
        messages.extend(other.into_vec());
        Errors::Many(messages)
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Errors::One(message) => vec![message],
            Errors::Many(messages) => messages,
        }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

impl From<&str> for Errors {
    fn from(message: &str) -> Self {
        Errors::One(message.to_string())
    }
}

impl From<String> for Errors {
    fn from(message: String) -> Self {
        Errors::One(message)
    }
}

impl From<Vec<String>> for Errors {
    fn from(messages: Vec<String>) -> Self {
        Errors::Many(messages)
    }
}
