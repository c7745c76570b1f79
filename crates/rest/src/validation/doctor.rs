//! Create and update body validation.

use clinic_persistence::types::{DoctorChanges, NewDoctor};
use serde_json::{Map, Value};

use super::ValidationErrors;
use super::rules::{EMAIL, FieldRule, FieldValue, IS_ACTIVE, NAME, PHONE, SPECIALTY};

/// Validates a create body. All fields except `is_active` are required.
///
/// Keys that match no rule are ignored.
pub fn validate_create(body: &Value) -> Result<NewDoctor, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(map) = as_object(body, &mut errors) else {
        return Err(errors);
    };

    let name = required_text(map, &NAME, &mut errors);
    let specialty = required_text(map, &SPECIALTY, &mut errors);
    let email = required_text(map, &EMAIL, &mut errors);
    let phone = required_text(map, &PHONE, &mut errors);
    let is_active = optional_bool(map, &IS_ACTIVE, &mut errors);

    match (name, specialty, email, phone) {
        (Some(name), Some(specialty), Some(email), Some(phone)) => errors.finish(NewDoctor {
            name,
            specialty,
            email,
            phone,
            is_active,
        }),
        _ => Err(errors),
    }
}

/// Validates a partial update body. Every field is optional.
///
/// An empty result is not an error here; the handler decides what an update
/// with no fields means.
pub fn validate_update(body: &Value) -> Result<DoctorChanges, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(map) = as_object(body, &mut errors) else {
        return Err(errors);
    };

    let changes = DoctorChanges {
        name: optional_text(map, &NAME, &mut errors),
        specialty: optional_text(map, &SPECIALTY, &mut errors),
        email: optional_text(map, &EMAIL, &mut errors),
        phone: optional_text(map, &PHONE, &mut errors),
        is_active: optional_bool(map, &IS_ACTIVE, &mut errors),
    };

    errors.finish(changes)
}

fn as_object<'a>(body: &'a Value, errors: &mut ValidationErrors) -> Option<&'a Map<String, Value>> {
    let map = body.as_object();
    if map.is_none() {
        errors.push("body", "Expected object");
    }
    map
}

fn check(
    map: &Map<String, Value>,
    rule: &FieldRule,
    errors: &mut ValidationErrors,
) -> Option<FieldValue> {
    let value = map.get(rule.field)?;
    match rule.check(value) {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(rule.field, message);
            None
        }
    }
}

fn required_text(
    map: &Map<String, Value>,
    rule: &FieldRule,
    errors: &mut ValidationErrors,
) -> Option<String> {
    if !map.contains_key(rule.field) {
        errors.push(rule.field, "Required");
        return None;
    }
    optional_text(map, rule, errors)
}

fn optional_text(
    map: &Map<String, Value>,
    rule: &FieldRule,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match check(map, rule, errors)? {
        FieldValue::Text(s) => Some(s),
        FieldValue::Bool(_) => None,
    }
}

fn optional_bool(
    map: &Map<String, Value>,
    rule: &FieldRule,
    errors: &mut ValidationErrors,
) -> Option<bool> {
    match check(map, rule, errors)? {
        FieldValue::Bool(b) => Some(b),
        FieldValue::Text(_) => None,
    }
}
