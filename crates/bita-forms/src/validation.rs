//! Validation of field values against their specs.
//!
//! Errors accumulate rather than short-circuiting, so every invalid field is
//! reported at once. Both functions are pure.

use std::collections::HashMap;

use crate::error::FieldError;
use crate::fields::FieldSpec;
use crate::state::FormErrors;

/// Validates one value against its spec.
///
/// A blank value (empty or whitespace only) fails with
/// [`FieldError::MissingRequired`] when the field is required and passes
/// otherwise; the rule is only consulted for non-blank values, which fail
/// with [`FieldError::PatternMismatch`].
///
/// # Examples
///
/// ```
/// use bita_forms::fields::{FieldRule, FieldSpec};
/// use bita_forms::validation::validate_field;
///
/// let email = FieldSpec::new("email").rule(FieldRule::Email);
/// assert!(validate_field(&email, "d@x.com").is_ok());
/// assert!(validate_field(&email, "bad").is_err());
/// ```
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        if spec.required {
            return Err(FieldError::MissingRequired {
                field: spec.name.clone(),
                message: spec.required_message.clone(),
            });
        }
        return Ok(());
    }

    match &spec.rule {
        Some(rule) if !rule.matches(value) => Err(FieldError::PatternMismatch {
            field: spec.name.clone(),
            message: spec.error_message.clone(),
        }),
        _ => Ok(()),
    }
}

/// Validates every spec against `values` and returns only the failures.
///
/// Missing keys are treated as empty values.
pub fn validate_form(specs: &[FieldSpec], values: &HashMap<String, String>) -> FormErrors {
    specs
        .iter()
        .filter_map(|spec| {
            let value = values.get(&spec.name).map_or("", String::as_str);
            validate_field(spec, value)
                .err()
                .map(|err| (spec.name.clone(), err))
        })
        .collect()
}
