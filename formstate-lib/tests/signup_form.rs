//! End-to-end scenarios for a sign-up form driven through the model.

use formstate_lib::prelude::*;

fn integer() -> Rule<Value> {
    rules::integer("must be an integer").into_value()
}

fn required() -> Rule<Value> {
    rules::required("required").into_value()
}

fn equals_password(password: &Field<Value, Value>) -> Rule<Value> {
    let expected = password.raw().as_str().unwrap_or_default().to_string();
    rules::equals(expected, "Passwords don't match").into_value()
}

fn signup() -> Model {
    Model::new()
        .with_field("age", Field::new(Value::from("")))
        .with_field("password", Field::new(Value::from("")))
        .with_field("confirm", Field::new(Value::from("")))
}

// =============================================================================
// Single field lifecycle
// =============================================================================

#[test]
fn test_age_blur_then_fix() {
    let model = signup().validate_on_blur("age", &integer()).unwrap();
    assert_eq!(
        model.field("age").unwrap().validity(),
        &Validity::Invalid(Errors::from("must be an integer"))
    );

    let model = model
        .validate_on_change("age", Value::from("42"), &integer())
        .unwrap();
    let age = model.field("age").unwrap();
    assert_eq!(age.validity(), &Validity::Valid(Value::Long(42)));
    assert_eq!(age.raw(), &Value::from("42"));
}

#[test]
fn test_typing_into_pristine_field_shows_no_error() {
    let mut model = signup();
    for raw in ["4", "4x", "4x2"] {
        model = model
            .validate_on_change("age", Value::from(raw), &integer())
            .unwrap();
        assert_eq!(
            model.field("age").unwrap().validity(),
            &Validity::NotValidated
        );
    }
    assert_eq!(model.field("age").unwrap().raw(), &Value::from("4x2"));
}

#[test]
fn test_submit_checks_every_raw_value() {
    for raw in ["", "abc", "17", " 8 "] {
        let field = Field::<Value, Value>::new(Value::from(raw));
        let expected: Validity<Value> = integer().validate(&Value::from(raw)).into();
        assert_eq!(
            field.validate(&integer(), Event::OnSubmit).validity(),
            &expected
        );
    }
}

// =============================================================================
// Related fields
// =============================================================================

#[test]
fn test_confirm_follows_password_once_engaged() {
    let model = signup()
        .validate_on_change("password", Value::from("hunter22"), &required())
        .unwrap();

    let untouched = model
        .validate_on_related_change("confirm", "password", equals_password)
        .unwrap();
    assert_eq!(untouched, model);

    let model = model
        .validate_on_change("confirm", Value::from("hunter2"), &required())
        .unwrap()
        .validate_on_related_submit("confirm", "password", equals_password)
        .unwrap();
    assert_eq!(
        model.field("confirm").unwrap().error(),
        Some(&Errors::from("Passwords don't match"))
    );

    // The user fixes the password instead of the confirmation.
    let model = model
        .validate_on_change("password", Value::from("hunter2"), &required())
        .unwrap()
        .validate_on_related_change("confirm", "password", equals_password)
        .unwrap();
    assert_eq!(
        model.field("confirm").unwrap().value(),
        Some(&Value::from("hunter2"))
    );
}

// =============================================================================
// Submission
// =============================================================================

#[test]
fn test_submit_if_valid_name_only() {
    let valid: Model = Model::new().with_field(
        "name",
        Field::pre_validated(Value::from("Bob"), Clone::clone),
    );
    let submitted = valid
        .submit_if_valid(["name"], |bag| Ok(bag))
        .unwrap()
        .unwrap();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted.get_string("name"), Ok(Some("Bob")));

    let pristine: Model = Model::new().with_field("name", Field::new(Value::from("Bob")));
    let error = pristine
        .submit_if_valid(["name"], |bag| Ok(bag))
        .unwrap()
        .unwrap_err();
    assert_eq!(error.to_string(), "Not validated");
    assert_eq!(error.to_errors(), Errors::from("Not validated"));
}

#[test]
fn test_full_submit_pass() {
    let mut model = signup()
        .validate_on_change("age", Value::from("30"), &integer())
        .unwrap()
        .validate_on_change("password", Value::from("pw"), &required())
        .unwrap()
        .validate_on_change("confirm", Value::from("pw"), &required())
        .unwrap();

    model = model.validate_on_submit("age", &integer()).unwrap();
    model = model
        .validate_on_submit("password", &required())
        .unwrap();
    model = model
        .validate_on_submit("confirm", &required())
        .unwrap()
        .validate_on_related_submit("confirm", "password", equals_password)
        .unwrap();

    let age = model
        .submit_if_valid(["age", "password", "confirm"], |bag| {
            Ok(bag.get_long("age")?.unwrap_or_default())
        })
        .unwrap();
    assert_eq!(age, Ok(30));
}

#[test]
fn test_unknown_key_is_a_caller_bug() {
    let error = signup()
        .validate_on_blur("agee", &integer())
        .unwrap_err();
    assert_eq!(error.to_string(), "Field 'agee' not found in model");

    assert!(
        signup()
            .submit_if_valid(["agee"], |bag| Ok(bag))
            .is_err()
    );
}
