//! Built-in rules for text inputs.
//!
//! Every rule takes the message to report on failure. Rules that produce
//! text return the input unchanged; parsing rules return the parsed value.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use super::{Rule, Validator};
use crate::field::Errors;

/// Require the input to be non-blank.
pub fn required(msg: impl Into<String>) -> Rule<String> {
    text_rule(|text| !text.trim().is_empty(), msg)
}

/// Require minimum length (in characters).
pub fn min_length(min: usize, msg: impl Into<String>) -> Rule<String> {
    text_rule(move |text| text.chars().count() >= min, msg)
}

/// Require maximum length (in characters).
pub fn max_length(max: usize, msg: impl Into<String>) -> Rule<String> {
    text_rule(move |text| text.chars().count() <= max, msg)
}

/// Require the input to match a regex pattern.
pub fn pattern(pattern: &str, msg: impl Into<String>) -> Result<Rule<String>, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(text_rule(move |text| re.is_match(text), msg))
}

/// Require a valid email address.
pub fn email(msg: impl Into<String>) -> Rule<String> {
    text_rule(email_address::EmailAddress::is_valid, msg)
}

/// Require the input to equal another value, e.g. a password confirmation.
pub fn equals(expected: impl Into<String>, msg: impl Into<String>) -> Rule<String> {
    let expected = expected.into();
    text_rule(move |text| text == expected, msg)
}

/// Require the input to be one of the given options.
pub fn one_of<I, S>(options: I, msg: impl Into<String>) -> Rule<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options: Vec<String> = options.into_iter().map(Into::into).collect();
    text_rule(move |text| options.iter().any(|option| option == text), msg)
}

/// Parse the input as an integer, ignoring surrounding whitespace.
pub fn integer(msg: impl Into<String>) -> Rule<i64> {
    parsed(msg)
}

/// Parse the input as an exact decimal number.
pub fn decimal(msg: impl Into<String>) -> Rule<Decimal> {
    parsed(msg)
}

/// Run every rule and report all of their messages.
///
/// Unlike chaining with [`Rule::check`], which stops at the first failure,
/// this collects every failing rule's messages into one list.
pub fn all(rules: Vec<Rule<String>>) -> Rule<String> {
    Rule::new(move |text| {
        let mut messages = Vec::new();
        for rule in &rules {
            if let Err(errors) = rule.validate(text) {
                messages.extend(errors.into_vec());
            }
        }
        if messages.is_empty() {
            Ok(text.to_string())
        } else {
            Err(Errors::Many(messages))
        }
    })
}

fn text_rule<F>(predicate: F, msg: impl Into<String>) -> Rule<String>
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let msg = msg.into();
    Rule::new(move |text| {
        if predicate(text) {
            Ok(text.to_string())
        } else {
            Err(Errors::One(msg.clone()))
        }
    })
}

fn parsed<T>(msg: impl Into<String>) -> Rule<T>
where
    T: FromStr + 'static,
{
    let msg = msg.into();
    Rule::new(move |text| {
        text.trim()
            .parse()
            .map_err(|_| Errors::One(msg.clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rule = required("Name is required");
        assert_eq!(rule.validate("Bob"), Ok("Bob".to_string()));
        assert_eq!(rule.validate("   "), Err(Errors::from("Name is required")));
    }

    #[test]
    fn test_lengths_count_characters() {
        assert!(min_length(3, "short").validate("héé").is_ok());
        assert!(max_length(2, "long").validate("héé").is_err());
    }

    #[test]
    fn test_pattern() {
        let zip = pattern(r"^\d{5}$", "five digits").unwrap();
        assert!(zip.validate("12345").is_ok());
        assert!(zip.validate("1234a").is_err());
        assert!(pattern("(", "broken").is_err());
    }

    #[test]
    fn test_email() {
        let rule = email("Please enter a valid email");
        assert!(rule.validate("bob@example.com").is_ok());
        assert!(rule.validate("bob").is_err());
    }

    #[test]
    fn test_equals_and_one_of() {
        assert!(equals("secret", "mismatch").validate("secret").is_ok());
        assert_eq!(
            equals("secret", "mismatch").validate("Secret"),
            Err(Errors::from("mismatch"))
        );

        let plan = one_of(["free", "pro"], "unknown plan");
        assert!(plan.validate("pro").is_ok());
        assert!(plan.validate("enterprise").is_err());
    }

    #[test]
    fn test_numeric_parsing() {
        assert_eq!(integer("must be an integer").validate(" 42 "), Ok(42));
        assert_eq!(
            integer("must be an integer").validate("4.2"),
            Err(Errors::from("must be an integer"))
        );
        assert_eq!(
            decimal("must be a number").validate("19.99"),
            Ok(Decimal::new(1999, 2))
        );
    }

    #[test]
    fn test_all_collects_every_message() {
        let password = all(vec![
            min_length(8, "at least 8 characters"),
            pattern(r"\d", "at least one digit").unwrap(),
        ]);
        assert_eq!(
            password.validate("abc"),
            Err(Errors::Many(vec![
                "at least 8 characters".to_string(),
                "at least one digit".to_string(),
            ]))
        );
        assert_eq!(password.validate("abcdefg1"), Ok("abcdefg1".to_string()));
    }
}
