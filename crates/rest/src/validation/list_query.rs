//! List query parameter validation.

use std::collections::HashMap;

use clinic_persistence::types::{ListFilter, SortColumn, SortDirection};

use super::ValidationErrors;

/// Rows per page when `pageSize` is absent.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest accepted `pageSize`.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Largest accepted `page`: the largest integer an f64 represents exactly.
pub const MAX_PAGE: u64 = (1 << 53) - 1;

/// Parses and validates list query parameters.
///
/// `page` and `pageSize` are coerced from strings before their bounds are
/// checked. Unknown `sortBy` values fall back to `created_at`, and any
/// `sortDir` other than `asc` sorts descending.
pub fn parse_list_query(params: &HashMap<String, String>) -> Result<ListFilter, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let page = coerce_integer(params, "page", 1, MAX_PAGE, 1, &mut errors);
    let page_size = coerce_integer(
        params,
        "pageSize",
        1,
        u64::from(MAX_PAGE_SIZE),
        u64::from(DEFAULT_PAGE_SIZE),
        &mut errors,
    );
    let page_size = u32::try_from(page_size).unwrap_or(DEFAULT_PAGE_SIZE);

    let sort_by = params
        .get("sortBy")
        .and_then(|s| s.parse::<SortColumn>().ok())
        .unwrap_or_default();
    let sort_dir = match params.get("sortDir").map(String::as_str) {
        Some("asc") => SortDirection::Asc,
        _ => SortDirection::Desc,
    };

    let filter = ListFilter {
        page,
        page_size,
        query: trimmed(params, "q"),
        specialty: trimmed(params, "specialty"),
        sort_by,
        sort_dir,
    };

    errors.finish(filter)
}

fn trimmed(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn coerce_integer(
    params: &HashMap<String, String>,
    key: &str,
    min: u64,
    max: u64,
    default: u64,
    errors: &mut ValidationErrors,
) -> u64 {
    let Some(raw) = params.get(key) else {
        return default;
    };

    let number = match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => {
            errors.push(key, "Expected number");
            return default;
        }
    };

    if number.fract() != 0.0 {
        errors.push(key, "Expected integer");
        return default;
    }
    // Both bounds are at most 2^53 - 1, so they convert to f64 exactly
    if number < min as f64 {
        errors.push(key, format!("Must be greater than or equal to {}", min));
        return default;
    }
    if number > max as f64 {
        errors.push(key, format!("Must be less than or equal to {}", max));
        return default;
    }

    // In range and integral, so the cast is exact
    number as u64
}
