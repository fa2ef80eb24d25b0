//! Schema-driven parameter validation
//!
//! Evaluates a single entered value against its definition and
//! returns the ordered list of violated rules. The function is pure:
//! same inputs, same issue list, no I/O. Issue order is fixed so form
//! rendering is deterministic: required check first, then the
//! branch-specific checks (min before max, min-length before
//! max-length, then regex, then option membership).
//!
//! A rule with an uncompilable regex is authored upstream, not by the
//! surveyor, so it degrades to "no constraint" with a logged warning
//! instead of blocking input.

use regex::Regex;
use tracing::warn;

use crate::model::{ParameterDataType, ParameterDefinition, ParameterValue, ValidationRule};

/// One violated validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// The definition is required and no value was entered.
    MissingRequired,
    /// The value variant does not match the definition's data type.
    TypeMismatch {
        /// The data type the definition expects.
        expected: ParameterDataType,
    },
    /// A number is below the configured minimum.
    Min(f64),
    /// A number is above the configured maximum.
    Max(f64),
    /// A text is shorter than the configured minimum length.
    MinLength(usize),
    /// A text is longer than the configured maximum length.
    MaxLength(usize),
    /// A text does not match the configured pattern.
    Regex(String),
    /// An option value is not a member of the definition's enum set.
    InvalidOption(String),
}

/// Validates `value` against `definition`, returning all violated
/// rules in evaluation order. An empty list means the value is valid.
pub fn validate(
    value: Option<&ParameterValue>,
    definition: &ParameterDefinition,
) -> Vec<ValidationIssue> {
    let Some(value) = value else {
        return if definition.is_required {
            vec![ValidationIssue::MissingRequired]
        } else {
            Vec::new()
        };
    };

    match (definition.data_type, value) {
        (ParameterDataType::Text, ParameterValue::Text(text)) => {
            validate_text(text, definition.validation.as_ref())
        }
        (ParameterDataType::Number, ParameterValue::Number(number)) => {
            validate_number(*number, definition.validation.as_ref())
        }
        (ParameterDataType::Boolean, ParameterValue::Bool(_)) => Vec::new(),
        (ParameterDataType::Date, ParameterValue::Date(_)) => Vec::new(),
        (ParameterDataType::Enumerated, ParameterValue::Option(option)) => {
            validate_option(option, definition.enum_values.as_deref())
        }
        _ => vec![ValidationIssue::TypeMismatch {
            expected: definition.data_type,
        }],
    }
}

fn validate_text(text: &str, rule: Option<&ValidationRule>) -> Vec<ValidationIssue> {
    let Some(rule) = rule else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    let char_count = text.chars().count();
    if let Some(min_length) = rule.min_length {
        if char_count < min_length {
            issues.push(ValidationIssue::MinLength(min_length));
        }
    }
    if let Some(max_length) = rule.max_length {
        if char_count > max_length {
            issues.push(ValidationIssue::MaxLength(max_length));
        }
    }
    if let Some(pattern) = rule.regex.as_deref() {
        if !matches_pattern(text, pattern) {
            issues.push(ValidationIssue::Regex(pattern.to_string()));
        }
    }
    issues
}

fn validate_number(number: f64, rule: Option<&ValidationRule>) -> Vec<ValidationIssue> {
    let Some(rule) = rule else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    if let Some(min) = rule.min {
        if number < min {
            issues.push(ValidationIssue::Min(min));
        }
    }
    if let Some(max) = rule.max {
        if number > max {
            issues.push(ValidationIssue::Max(max));
        }
    }
    issues
}

fn validate_option(option: &str, enum_values: Option<&[String]>) -> Vec<ValidationIssue> {
    match enum_values {
        None | Some([]) => Vec::new(),
        Some(values) if values.iter().any(|v| v == option) => Vec::new(),
        Some(_) => vec![ValidationIssue::InvalidOption(option.to_string())],
    }
}

/// Unanchored match against the rule pattern. A pattern that fails to
/// compile is not the surveyor's fault: log it and accept the text.
fn matches_pattern(text: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(text),
        Err(error) => {
            warn!(pattern, %error, "ignoring uncompilable validation regex");
            true
        }
    }
}
