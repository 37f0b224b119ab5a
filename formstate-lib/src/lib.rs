//! Form field validation state machine
//!
//! Tracks the validation lifecycle of user-entered form fields and combines
//! the per-field results into a single pass/fail decision for submission.
//!
//! - [`field`]: one field's raw input, its validity, and the event-driven
//!   transition function.
//! - [`validator`]: the validator contract plus built-in text rules.
//! - [`model`]: a named collection of fields, event operations by key, and
//!   the take-all-or-first-error combine used on submit.
//!
//! # Example
//!
//! ```
//! use formstate_lib::prelude::*;
//!
//! let age = rules::integer("must be an integer").into_value();
//! let model: Model = Model::new().with_field("age", Field::new(Value::from("")));
//!
//! let model = model.validate_on_blur("age", &age)?;
//! assert_eq!(
//!     model.field("age")?.error(),
//!     Some(&Errors::from("must be an integer"))
//! );
//!
//! let model = model.validate_on_change("age", Value::from("42"), &age)?;
//! let submitted = model.submit_if_valid(["age"], |bag| Ok(bag.get_long("age")?))?;
//! assert_eq!(submitted, Ok(Some(42)));
//! # Ok::<(), formstate_lib::error::ModelError>(())
//! ```

pub mod error;
pub mod field;
pub mod model;
pub mod validator;

mod value;

pub use value::*;

pub mod prelude {
    pub use crate::Value;
    pub use crate::error::{FieldError, FieldNotValid, ModelError, SubmitError};
    pub use crate::field::{Errors, Event, Field, Validity};
    pub use crate::model::{Bag, Model};
    pub use crate::validator::{AsText, Outcome, Rule, Validator, optional, rules};
}
