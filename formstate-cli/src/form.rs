//! The sign-up form replayed by the CLI

use std::collections::BTreeMap;

use formstate_lib::prelude::*;
use log::{debug, info};
use serde::Serialize;

use crate::script::Step;

/// Fields of the form, in submission order.
pub const FIELDS: [&str; 6] = ["name", "email", "age", "password", "confirm", "newsletter"];

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUp {
    pub name: String,
    pub email: Option<String>,
    pub age: i64,
    pub newsletter: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Submission {
    Accepted {
        signup: SignUp,
    },
    Blocked {
        field: Option<String>,
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub fields: BTreeMap<&'a str, &'a Field<Value, Value>>,
    pub submission: Option<&'a Submission>,
}

pub struct SignupForm {
    model: Model,
    submission: Option<Submission>,
}

impl SignupForm {
    pub fn new() -> Self {
        let model = FIELDS
            .iter()
            .map(|&key| {
                let field = match key {
                    "newsletter" => Field::pre_validated(Value::Bool(false), Clone::clone),
                    _ => Field::new(Value::from("")),
                };
                (key.to_string(), field)
            })
            .collect();
        Self {
            model,
            submission: None,
        }
    }

    /// Applies one recorded event.
    pub fn apply(&mut self, step: Step) -> Result<(), ModelError> {
        match step {
            Step::Change { field, value } => {
                info!("change {} = {:?}", field, value);
                let validator = validator(&self.model, &field)?;
                self.model = self
                    .model
                    .validate_on_change(field.as_str(), value, &*validator)?;
                self.password_touched(&field)?;
            }
            Step::Blur { field } => {
                info!("blur {}", field);
                let validator = validator(&self.model, &field)?;
                self.model = self.model.validate_on_blur(field.as_str(), &*validator)?;
                self.password_touched(&field)?;
            }
            Step::Submit => {
                info!("submit");
                self.submit()?;
            }
        }
        Ok(())
    }

    /// Returns `true` once a submission went through.
    pub fn accepted(&self) -> bool {
        matches!(self.submission, Some(Submission::Accepted { .. }))
    }

    pub fn report(&self) -> Report<'_> {
        Report {
            fields: self
                .model
                .iter()
                .map(|(key, field)| (key.as_str(), field))
                .collect(),
            submission: self.submission.as_ref(),
        }
    }

    fn password_touched(&mut self, field: &str) -> Result<(), ModelError> {
        if field == "password" {
            self.model = self
                .model
                .validate_on_related_change("confirm", "password", matches_password)?;
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<(), ModelError> {
        let mut model = self.model.clone();
        for key in FIELDS {
            model = model.validate_on_submit(key, &*validator(&model, key)?)?;
        }
        model = model.validate_on_related_submit("confirm", "password", matches_password)?;

        let submission = match model.submit_if_valid(FIELDS, build_signup)? {
            Ok(signup) => Submission::Accepted { signup },
            Err(error) => Submission::Blocked {
                field: error.key().cloned(),
                message: error.to_errors().to_string(),
            },
        };
        debug!("submission: {:?}", submission);

        self.model = model;
        self.submission = Some(submission);
        Ok(())
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the validator for `key`. `confirm` is checked against the current password.
fn validator(model: &Model, key: &str) -> Result<Box<dyn Validator<Value, Value>>, ModelError> {
    let validator: Box<dyn Validator<Value, Value>> = match key {
        "name" => Box::new(
            rules::all(vec![
                rules::required("Name is required"),
                rules::min_length(2, "Name must be at least 2 characters"),
            ])
            .into_value(),
        ),
        "email" => Box::new(
            rules::email("Please enter a valid email")
                .optional()
                .into_value(),
        ),
        "age" => Box::new(
            rules::integer("must be an integer")
                .in_range(13, 130, "must be between 13 and 130")
                .into_value(),
        ),
        "password" => Box::new(
            rules::min_length(8, "Password must be at least 8 characters").into_value(),
        ),
        "confirm" => Box::new(matches_password(model.field("password")?)),
        "newsletter" => Box::new(checkbox),
        other => return Err(ModelError::key_not_found(other)),
    };
    Ok(validator)
}

fn checkbox(raw: &Value) -> Outcome<Value> {
    match raw {
        Value::Bool(checked) => Ok(Value::Bool(*checked)),
        _ => Err("must be checked or unchecked".into()),
    }
}

fn matches_password(password: &Field<Value, Value>) -> Rule<Value> {
    let expected = password.raw().as_str().unwrap_or_default().to_string();
    rules::required("Please confirm your password")
        .check(move |text| *text == expected, "Passwords don't match")
        .into_value()
}

fn build_signup(bag: Bag<String, Value>) -> Outcome<SignUp> {
    let signup = SignUp {
        name: bag.get_string("name")?.unwrap_or_default().to_string(),
        email: bag.get_string("email")?.map(str::to_string),
        age: bag.get_long("age")?.unwrap_or_default(),
        newsletter: bag.get_bool("newsletter")?.unwrap_or_default(),
    };
    if signup.newsletter && signup.email.is_none() {
        return Err("An email is required to receive the newsletter".into());
    }
    Ok(signup)
}
