use super::diagnostic::{DiagnosticCode, Severity};
use crate::core::catalog::{ParameterDefinition, ParameterType};
use crate::core::utils::similarity::{self, SuggestionPolicy};
use phf::{Set, phf_set};
use regex::Regex;
use std::sync::LazyLock;

static BOOLEAN_WORDS: Set<&'static str> = phf_set! {
    "yes", "no", "true", "false", "on", "off",
};

static PATH_PARAMETERS: Set<&'static str> = phf_set! {
    "include", "xtc-file", "trr-file", "gro-file", "top-file",
};

static GROUP_PARAMETERS: Set<&'static str> = phf_set! {
    "tc-grps", "energygrps",
};

static INTEGER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?$")
        .expect("internal integer pattern must compile")
});

static REAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]*\.?[0-9]+([eE][+-]?[0-9]+)?$")
        .expect("internal real pattern must compile")
});

/// A problem with a single value, before it is placed on a line.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueIssue {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
}

impl ValueIssue {
    fn error(code: DiagnosticCode, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
        }
    }

    fn warning(code: DiagnosticCode, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
        }
    }
}

/// Checks `value` against `definition`.
///
/// The rules run in a fixed priority order and the first failure wins: missing or
/// blank value, then the type-specific rule. Enum failures list the valid values
/// and, when `policy` finds close matches, a "Did you mean" hint. String rules
/// only ever produce warnings.
///
/// # Arguments
///
/// * `definition` - The catalog entry of the parameter being assigned.
/// * `value` - The value as written, without its trailing comment.
/// * `policy` - Threshold and limit for enum value suggestions.
///
/// # Return
///
/// `None` when the value is acceptable.
pub fn check_value(
    definition: &ParameterDefinition,
    value: &str,
    policy: SuggestionPolicy,
) -> Option<ValueIssue> {
    if value.is_empty() {
        return Some(ValueIssue::error(
            DiagnosticCode::MissingValue,
            format!("Missing value for parameter {}", definition.name),
        ));
    }
    let value = value.trim();
    if value.is_empty() {
        return Some(ValueIssue::error(
            DiagnosticCode::EmptyValue,
            format!("Empty value for parameter {}", definition.name),
        ));
    }

    match definition.kind {
        ParameterType::Enum => check_enum(definition, value, policy),
        ParameterType::Boolean => check_boolean(definition, value),
        ParameterType::Integer | ParameterType::Real => {
            if definition.multi_value {
                value
                    .split_whitespace()
                    .find_map(|token| check_number(definition, token))
            } else {
                check_number(definition, value)
            }
        }
        ParameterType::String => check_string(definition, value),
    }
}

/// Whether `value` is one of the accepted boolean words, ignoring case.
pub fn is_boolean_word(value: &str) -> bool {
    BOOLEAN_WORDS.contains(value.to_ascii_lowercase().as_str())
}

fn check_enum(
    definition: &ParameterDefinition,
    value: &str,
    policy: SuggestionPolicy,
) -> Option<ValueIssue> {
    if definition.valid_values.is_empty() || definition.matching_value(value).is_some() {
        return None;
    }

    let mut message = format!(
        "Invalid value '{}' for {}. Valid values: {}",
        value,
        definition.name,
        definition.valid_values.join(", ")
    );
    let suggestions = similarity::suggest(
        value,
        definition.valid_values.iter().map(String::as_str),
        policy,
    );
    if !suggestions.is_empty() {
        message.push_str(&format!(". Did you mean: {}?", suggestions.join(", ")));
    }
    Some(ValueIssue::error(DiagnosticCode::InvalidEnumValue, message))
}

fn check_boolean(definition: &ParameterDefinition, value: &str) -> Option<ValueIssue> {
    if is_boolean_word(value) {
        return None;
    }
    Some(ValueIssue::error(
        DiagnosticCode::InvalidBooleanValue,
        format!(
            "Invalid boolean value '{}' for {}. Use: yes/no, true/false, or on/off",
            value, definition.name
        ),
    ))
}

fn check_number(definition: &ParameterDefinition, value: &str) -> Option<ValueIssue> {
    let number = match definition.kind {
        ParameterType::Integer => {
            if !INTEGER_PATTERN.is_match(value) {
                return Some(ValueIssue::error(
                    DiagnosticCode::InvalidIntegerValue,
                    format!(
                        "Invalid integer value '{}' for {}. Expected an integer number",
                        value, definition.name
                    ),
                ));
            }
            match value.parse::<f64>() {
                Ok(number) if number.is_finite() && number.fract() == 0.0 => number,
                _ => {
                    return Some(ValueIssue::error(
                        DiagnosticCode::InvalidIntegerValue,
                        format!("Invalid integer value '{}' for {}", value, definition.name),
                    ));
                }
            }
        }
        _ => {
            let parsed = REAL_PATTERN
                .is_match(value)
                .then(|| value.parse::<f64>().ok())
                .flatten()
                .filter(|number| number.is_finite());
            match parsed {
                Some(number) => number,
                None => {
                    return Some(ValueIssue::error(
                        DiagnosticCode::InvalidRealValue,
                        format!(
                            "Invalid real number value '{}' for {}. Expected a decimal number",
                            value, definition.name
                        ),
                    ));
                }
            }
        }
    };

    let range = definition.effective_range()?;
    if let Some(min) = range.min.filter(|&min| number < min) {
        return Some(ValueIssue::error(
            DiagnosticCode::ValueBelowMinimum,
            format!(
                "Value {} is below minimum {} for {}",
                number, min, definition.name
            ),
        ));
    }
    if let Some(max) = range.max.filter(|&max| number > max) {
        return Some(ValueIssue::error(
            DiagnosticCode::ValueAboveMaximum,
            format!(
                "Value {} is above maximum {} for {}",
                number, max, definition.name
            ),
        ));
    }
    None
}

fn check_string(definition: &ParameterDefinition, value: &str) -> Option<ValueIssue> {
    let name = definition.name.as_str();

    if PATH_PARAMETERS.contains(name) && value.contains('\\') {
        return Some(ValueIssue::warning(
            DiagnosticCode::InvalidPathSeparator,
            format!(
                "Use forward slashes (/) in file paths for parameter {}",
                name
            ),
        ));
    }

    if GROUP_PARAMETERS.contains(name) {
        if let Some(group) = value
            .split_whitespace()
            .find(|group| *group != "System" && !is_group_name(group))
        {
            return Some(ValueIssue::warning(
                DiagnosticCode::InvalidGroupName,
                format!(
                    "Invalid group name '{}' in {}. Group names should start with a letter or underscore",
                    group, name
                ),
            ));
        }
    }

    None
}

fn is_group_name(group: &str) -> bool {
    let mut chars = group.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
