//! Recorded event scripts

use std::fs;
use std::path::Path;

use formstate_lib::Value;
use serde::Deserialize;

use crate::error::CliError;

/// One recorded UI event.
///
/// ```json
/// [
///   { "event": "change", "field": "age", "value": "42" },
///   { "event": "blur", "field": "age" },
///   { "event": "submit" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Step {
    Change { field: String, value: Value },
    Blur { field: String },
    Submit,
}

/// Reads a script file.
pub fn load(path: &Path) -> Result<Vec<Step>, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&json)
}

pub fn parse(json: &str) -> Result<Vec<Step>, CliError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let steps = parse(
            r#"[
                {"event": "change", "field": "newsletter", "value": true},
                {"event": "blur", "field": "age"},
                {"event": "submit"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Change {
                    field: "newsletter".into(),
                    value: Value::Bool(true)
                },
                Step::Blur {
                    field: "age".into()
                },
                Step::Submit,
            ]
        );
    }

    #[test]
    fn test_unknown_event() {
        assert!(matches!(
            parse(r#"[{"event": "focus", "field": "age"}]"#),
            Err(CliError::Script(_))
        ));
    }
}
