use crate::utils::error::{FleetError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_truck_id(field_name: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "Truck id cannot be empty".to_string(),
        });
    }

    if id.chars().any(char::is_control) {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.escape_debug().to_string(),
            reason: "Truck id contains control characters".to_string(),
        });
    }

    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FleetError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate truck id".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_not_empty<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(FleetError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}
