//! Request validation.
//!
//! Raw request input (query-string maps and JSON bodies) is checked against
//! declarative [`FieldRule`]s and coerced into the typed payloads the storage
//! layer accepts. Every violated rule is collected, so a single 400 response
//! reports all offending fields at once.
//!
//! - [`validate_create`] - JSON body to [`NewDoctor`](clinic_persistence::types::NewDoctor)
//! - [`validate_update`] - JSON body to [`DoctorChanges`](clinic_persistence::types::DoctorChanges)
//! - [`parse_list_query`] - query parameters to [`ListFilter`](clinic_persistence::types::ListFilter)

mod doctor;
mod list_query;
mod rules;

use std::fmt;

use serde::Serialize;

pub use doctor::{validate_create, validate_update};
pub use list_query::{DEFAULT_PAGE_SIZE, MAX_PAGE, MAX_PAGE_SIZE, parse_list_query};
pub use rules::{FieldKind, FieldRule, FieldValue};

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// The offending field, as named in the request.
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

impl ValidationIssue {
    /// Creates a new issue.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All issues found while validating one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(field, message));
    }

    /// Returns true if no issue was recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the recorded issues.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Consumes the collection, returning its issues.
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    /// Returns `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "Validation failed");
        }
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
