//! Declarative field rules for doctor payloads.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// The type and constraint a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A string of at least `min_len` characters.
    Text {
        /// Minimum length in characters.
        min_len: usize,
    },
    /// A string in email format.
    Email,
    /// A JSON boolean.
    Boolean,
}

/// A named field and its constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// JSON key of the field.
    pub field: &'static str,
    /// Constraint on its value.
    pub kind: FieldKind,
}

/// A value that passed its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A string value.
    Text(String),
    /// A boolean value.
    Bool(bool),
}

impl FieldRule {
    /// Creates a text rule.
    pub const fn text(field: &'static str, min_len: usize) -> Self {
        Self {
            field,
            kind: FieldKind::Text { min_len },
        }
    }

    /// Creates an email rule.
    pub const fn email(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldKind::Email,
        }
    }

    /// Creates a boolean rule.
    pub const fn boolean(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldKind::Boolean,
        }
    }

    /// Checks a present value against this rule.
    ///
    /// Returns the message for the violated constraint on failure.
    pub fn check(&self, value: &Value) -> Result<FieldValue, String> {
        match self.kind {
            FieldKind::Text { min_len } => {
                let s = value.as_str().ok_or("Expected string")?;
                if s.chars().count() < min_len {
                    return Err(format!("Must be at least {} characters", min_len));
                }
                Ok(FieldValue::Text(s.to_string()))
            }
            FieldKind::Email => {
                let s = value.as_str().ok_or("Expected string")?;
                if !EMAIL_PATTERN.is_match(s) {
                    return Err("Invalid email".to_string());
                }
                Ok(FieldValue::Text(s.to_string()))
            }
            FieldKind::Boolean => value
                .as_bool()
                .map(FieldValue::Bool)
                .ok_or_else(|| "Expected boolean".to_string()),
        }
    }
}

pub(crate) const NAME: FieldRule = FieldRule::text("name", 2);
pub(crate) const SPECIALTY: FieldRule = FieldRule::text("specialty", 2);
pub(crate) const EMAIL: FieldRule = FieldRule::email("email");
pub(crate) const PHONE: FieldRule = FieldRule::text("phone", 5);
pub(crate) const IS_ACTIVE: FieldRule = FieldRule::boolean("is_active");
