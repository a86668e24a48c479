//! Extracts joke text from a raw response body.

use serde_json::Value;

use crate::errors::ParseError;

/// Maps a raw response body to joke text.
pub type Parser = fn(&str) -> Result<String, ParseError>;

/// Default parser: the body must be a JSON object with a string `value`.
///
/// Other members (`id`, `url`, `categories`, ...) are ignored. The text is
/// returned as-is, so an empty `value` yields an empty string.
pub fn parse_value(body: &str) -> Result<String, ParseError> {
    let mut obj = match serde_json::from_str::<Value>(body)? {
        Value::Object(obj) => obj,
        other => return Err(ParseError::NotAnObject(kind_of(&other))),
    };
    match obj.remove("value") {
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(ParseError::NotAString),
        None => Err(ParseError::MissingValue),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
