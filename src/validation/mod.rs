//! Form validation
//!
//! Forms are checked on the client before anything is sent. A [`Schema`]
//! lists fields with the [`Rule`]s each must satisfy; validating returns
//! every violation as a [`FieldError`] instead of failing on the first one.
//! Ready-made schemas for each form live in [`schemas`].

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{FieldError, Result, ValidationError};

pub mod schemas;

/// Flat field-name to text mapping, as a form would submit it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Build a form from a request DTO using its wire field names.
    ///
    /// Null fields are left out, lists become comma-separated text.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        let mut form = Self::new();
        if let Value::Object(fields) = serde_json::to_value(value)? {
            for (key, value) in fields {
                let text = match value {
                    Value::Null => continue,
                    Value::String(s) => s,
                    Value::Array(items) => items
                        .iter()
                        .map(|item| match item {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(","),
                    other => other.to_string(),
                };
                form.values.insert(key, text);
            }
        }
        Ok(form)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Every filled-in field, in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A single constraint on a field value
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Present and not blank
    Required,
    /// Looks like an email address
    Email,
    /// At least this many characters
    MinLength(usize),
    /// At most this many characters
    MaxLength(usize),
    /// Parses as a number greater than zero
    Positive,
    /// Parses as a whole number of zero or more
    NonNegativeInteger,
    /// Phone number: 7 to 15 digits with optional `+`, spaces, dashes, parentheses
    Phone,
    /// One of a fixed set of values (case-insensitive)
    OneOf(&'static [&'static str]),
    /// Equal to another field of the same form
    Matches(&'static str),
}

impl Rule {
    /// Check one value. Returns the violated constraint, if any.
    ///
    /// Every rule except `Required` accepts an absent or blank value, so
    /// optional fields are only checked when filled in.
    pub fn check(&self, value: Option<&str>, form: &FormData) -> Option<String> {
        let value = value.map(str::trim).unwrap_or("");

        if let Rule::Required = self {
            return value.is_empty().then(|| "is required".to_string());
        }
        if value.is_empty() {
            return None;
        }

        match *self {
            Rule::Required => None,
            Rule::Email => (!is_email(value)).then(|| "must be a valid email address".to_string()),
            Rule::MinLength(min) => (value.chars().count() < min)
                .then(|| format!("must be at least {} characters", min)),
            Rule::MaxLength(max) => (value.chars().count() > max)
                .then(|| format!("must be at most {} characters", max)),
            Rule::Positive => (!value.parse::<f64>().is_ok_and(|n| n > 0.0))
                .then(|| "must be a positive number".to_string()),
            Rule::NonNegativeInteger => value
                .parse::<u64>()
                .is_err()
                .then(|| "must be a whole number".to_string()),
            Rule::Phone => (!is_phone(value)).then(|| "must be a valid phone number".to_string()),
            Rule::OneOf(options) => (!options.iter().any(|o| o.eq_ignore_ascii_case(value)))
                .then(|| format!("must be one of: {}", options.join(", "))),
            Rule::Matches(other) => (form.get(other).map(str::trim) != Some(value))
                .then(|| format!("must match {}", other)),
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn is_phone(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=15).contains(&digits)
}

/// Ordered set of fields and their rules
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field with its rules, checked in the given order.
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name.into(), rules.into_iter().collect()));
        self
    }

    /// The same schema with `Required` dropped, for partial updates that
    /// only send the fields being changed.
    pub fn partial(mut self) -> Self {
        for (_, rules) in &mut self.fields {
            rules.retain(|rule| !matches!(rule, Rule::Required));
        }
        self
    }

    /// Every violation, at most one per field, in declaration order.
    pub fn validate(&self, form: &FormData) -> Vec<FieldError> {
        self.fields
            .iter()
            .filter_map(|(name, rules)| {
                let value = form.get(name);
                rules
                    .iter()
                    .find_map(|rule| rule.check(value, form))
                    .map(|constraint| FieldError::new(name.clone(), constraint))
            })
            .collect()
    }

    /// `Err` carrying all violations if the form does not pass.
    pub fn ensure(&self, form: &FormData) -> std::result::Result<(), ValidationError> {
        let errors = self.validate(form);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }

    /// Validate a request DTO by its wire field names.
    pub fn ensure_dto<T: Serialize>(&self, value: &T) -> Result<()> {
        let form = FormData::from_serialize(value)?;
        self.ensure(&form)?;
        Ok(())
    }
}
