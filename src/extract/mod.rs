//! Pure text transforms that turn command output into environment variables.

use std::fmt;

use serde_json::Value;

use crate::error::{Error, Result};

/// One `KEY=value` pair destined for the environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub key: String,
    pub value: String,
}

impl Variable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Normalize a key the way the legacy generator did: the input is trimmed, every
/// character is uppercased, and characters that were already uppercase letters get
/// a `_` prepended. This is not conventional snake_case: `"myKey"` becomes
/// `"MY_KEY"` but `"ABC"` becomes `"_A_B_C"`, and digits never attract an
/// underscore. Files produced so far depend on the exact shape, so the transform
/// stays as is.
pub fn convert_camel_case_to_snake_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for letter in text.trim().chars() {
        if letter.is_uppercase() {
            result.push('_');
            result.push(letter);
        } else {
            result.extend(letter.to_uppercase());
        }
    }
    result
}

/// Lines that look like assignments: the literal ` = ` must appear.
pub fn variable_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| line.contains(" = ")).collect()
}

/// Parse one `<prefix>.<key>=<value>` log line into a Variable, discarding the
/// prefix (a stack or resource identifier). Returns None when the line does not
/// fit that shape.
pub fn parse_log_line(line: &str) -> Option<Variable> {
    let (_, rest) = line.split_once('.')?;
    let (key, value) = rest.split_once('=')?;
    Some(Variable::new(convert_camel_case_to_snake_case(key), value.trim()))
}

/// Extract variables from an outputs-file JSON document: a single top-level stack
/// whose entries become pairs in declaration order.
pub fn variables_from_outputs(text: &str) -> Result<Vec<Variable>> {
    let data: Value = serde_json::from_str(text)
        .map_err(|e| Error::Extraction(format!("outputs file is not valid JSON: {e}")))?;
    let stacks = data
        .as_object()
        .ok_or_else(|| Error::Extraction("outputs file must hold a JSON object".into()))?;
    let (stack, outputs) = stacks
        .iter()
        .next()
        .ok_or_else(|| Error::Extraction("outputs file holds no stacks".into()))?;
    let outputs = outputs.as_object().ok_or_else(|| {
        Error::Extraction(format!("outputs of stack '{stack}' must be a JSON object"))
    })?;

    Ok(outputs
        .iter()
        .map(|(key, value)| {
            Variable::new(convert_camel_case_to_snake_case(key), scalar_text(value))
        })
        .collect())
}

// JSON strings are written raw; everything else keeps its compact serialization.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Extract `key = value` pairs from credential-style text. These lines carry no
/// prefix, so only the `=` split applies; any other line is skipped.
pub fn credential_variables(text: &str) -> Vec<Variable> {
    variable_lines(text)
        .into_iter()
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            Some(Variable::new(convert_camel_case_to_snake_case(key), value.trim()))
        })
        .collect()
}
