//! Configuration validation rules.
//!
//! This module validates rule tables for usability:
//! - Sensitive name fragments must be non-empty (an empty fragment matches every variable)
//! - Security-check markers and insecure values must be non-empty
//! - The minimum password length must be at least 1

use crate::config::schema::InvlintConfig;
use crate::error::{InvlintError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Field the error concerns
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &InvlintConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config
        .required_groups
        .iter()
        .any(|g| g.trim().is_empty())
    {
        errors.push(ValidationError::new(
            "required_groups",
            "required_groups cannot contain an empty group name",
        ));
    }

    if config.sensitive_variables.iter().any(|v| v.is_empty()) {
        errors.push(ValidationError::new(
            "sensitive_variables",
            "sensitive_variables cannot contain an empty fragment",
        ));
    }

    if config.min_password_length == 0 {
        errors.push(ValidationError::new(
            "min_password_length",
            "min_password_length must be at least 1",
        ));
    }

    for (index, check) in config.security_checks.iter().enumerate() {
        if check.marker.is_empty() {
            errors.push(ValidationError::new(
                "security_checks",
                format!("security_checks[{}] has an empty marker", index),
            ));
        }
        if check.insecure_value.is_empty() {
            errors.push(ValidationError::new(
                "security_checks",
                format!("security_checks[{}] has an empty insecure_value", index),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &InvlintConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(InvlintError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
