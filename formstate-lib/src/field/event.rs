//! UI events that drive field transitions

use serde::{Deserialize, Serialize};

/// An event forwarded by the caller's UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "raw", rename_all = "snake_case")]
pub enum Event<R> {
    /// The form is being submitted.
    OnSubmit,
    /// The field lost focus.
    OnBlur,
    /// A field this one depends on changed.
    OnRelatedChange,
    /// The user entered a new raw value.
    OnChange(R),
}

impl<R> Event<R> {
    /// Returns the event name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Event::OnSubmit => "on_submit",
            Event::OnBlur => "on_blur",
            Event::OnRelatedChange => "on_related_change",
            Event::OnChange(_) => "on_change",
        }
    }
}
