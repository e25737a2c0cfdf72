use crate::utils::error::{Result, SecurityError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SecurityError::invalid_argument(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Checks a collection size against an inclusive cardinality range.
/// `max` of `None` means unbounded (the `1..*` case).
pub fn validate_cardinality(
    entity: &str,
    part: &str,
    count: usize,
    min: usize,
    max: Option<usize>,
) -> Result<()> {
    if count < min {
        return Err(SecurityError::constraint_violation(
            entity,
            format!("requires at least {} {}, found {}", min, part, count),
        ));
    }
    if let Some(max) = max {
        if count > max {
            return Err(SecurityError::constraint_violation(
                entity,
                format!("allows at most {} {}, found {}", max, part, count),
            ));
        }
    }
    Ok(())
}
