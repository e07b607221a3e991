//! Normalization of backend error payloads
//!
//! The API reports failures in several shapes: a JSON object with a
//! `message` (string or list of strings) and an optional `errors` list of
//! field/constraint pairs, a bare JSON string, plain text, or nothing at all.
//! [`ErrorPayload::from_body`] folds every shape into one closed union and
//! [`format_error`] turns any variant into a single display string.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message shown when the server gave no usable message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// A single rejected field and the constraint it violated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub constraint: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

/// Known error shapes returned by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPayload {
    /// `{ message?, errors: [{ field, constraint }] }`
    Structured {
        message: Option<String>,
        errors: Vec<FieldError>,
    },
    /// A message with no field detail (`{ message }`, a JSON string, or plain text)
    Message(String),
    /// Empty or unrecognizable body
    Unknown,
}

impl ErrorPayload {
    /// Classify a raw response body.
    pub fn from_body(body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            return ErrorPayload::Unknown;
        }

        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => {
                let message = map
                    .get("message")
                    .and_then(message_text)
                    .or_else(|| map.get("error").and_then(message_text));
                let errors = map
                    .get("errors")
                    .and_then(|v| Vec::<FieldError>::deserialize(v).ok())
                    .unwrap_or_default();

                match (message, errors.is_empty()) {
                    (None, true) => ErrorPayload::Unknown,
                    (Some(message), true) => ErrorPayload::Message(message),
                    (message, false) => ErrorPayload::Structured { message, errors },
                }
            }
            Ok(Value::String(text)) if !text.trim().is_empty() => ErrorPayload::Message(text),
            Ok(_) => ErrorPayload::Unknown,
            Err(_) => ErrorPayload::Message(body.to_string()),
        }
    }
}

/// Pull a message out of a `message` field, joining list-valued messages.
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_error(self))
    }
}

/// Render any error payload as one non-empty display string.
///
/// The message stands alone when there are no field errors. Otherwise the
/// field errors follow on a new line as `field: constraint` pairs joined by
/// `", "`, with the first character of that list upper-cased.
pub fn format_error(payload: &ErrorPayload) -> String {
    match payload {
        ErrorPayload::Structured { message, errors } => compose(message.as_deref(), errors),
        ErrorPayload::Message(message) => compose(Some(message), &[]),
        ErrorPayload::Unknown => UNKNOWN_ERROR_MESSAGE.to_string(),
    }
}

fn compose(message: Option<&str>, errors: &[FieldError]) -> String {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(UNKNOWN_ERROR_MESSAGE);

    if errors.is_empty() {
        return message.to_string();
    }

    let joined = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.constraint))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{} \n {} ", message, capitalize_first(&joined))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
