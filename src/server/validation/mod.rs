//! Builder validators for user-supplied and seeded records.
//!
//! Each builder collects raw values through chained setters and performs all
//! presence, length, range and format checks in `build()`. A successful build yields
//! the params type consumed by the repositories, so nothing reaches the database
//! without passing through a builder first.

pub mod catalog;
pub mod credentials;
pub mod expense;
pub mod todo;

use crate::server::error::validation::ValidationError;

/// Trims a required text value and checks its length in characters.
pub(crate) fn required_text(
    field: &str,
    value: Option<String>,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let Some(value) = value else {
        return Err(ValidationError::new(field, format!("{} is required", field)));
    };

    let trimmed = value.trim().to_string();
    check_length(field, &trimmed, min, max)?;

    Ok(trimmed)
}

/// Trims an optional text value, mapping blank input to `None`.
pub(crate) fn optional_text(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        return Ok(None);
    }
    check_length(field, &trimmed, 1, max)?;

    Ok(Some(trimmed))
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let message = if min <= 1 {
            if len == 0 {
                format!("{} is required", field)
            } else {
                format!("{} must be at most {} characters", field, max)
            }
        } else {
            format!("{} must be between {} and {} characters", field, min, max)
        };
        return Err(ValidationError::new(field, message));
    }

    Ok(())
}
