use super::diagnostic::DiagnosticCode;
use crate::core::utils::similarity::SuggestionPolicy;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Suggestion threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error("Invalid parameter name in '{list}' list: '{name}'")]
    InvalidParameterName { list: &'static str, name: String },
}

/// Tuning for a validation pass.
///
/// The defaults reproduce the stock rule set: `integrator` is required,
/// `nstlist`, `coulombtype` and `vdwtype` are recommended, and suggestions need a
/// similarity above 0.6 with at most three shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    pub required: Vec<String>,
    pub recommended: Vec<String>,
    pub suggestions: SuggestionPolicy,
    pub disabled_codes: HashSet<DiagnosticCode>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            required: vec!["integrator".to_string()],
            recommended: vec![
                "nstlist".to_string(),
                "coulombtype".to_string(),
                "vdwtype".to_string(),
            ],
            suggestions: SuggestionPolicy::default(),
            disabled_codes: HashSet::new(),
        }
    }
}

impl ValidationConfig {
    pub fn is_enabled(&self, code: DiagnosticCode) -> bool {
        !self.disabled_codes.contains(&code)
    }
}

/// Builder for [`ValidationConfig`]; unset fields keep their defaults.
#[derive(Default)]
pub struct ValidationConfigBuilder {
    required: Option<Vec<String>>,
    recommended: Option<Vec<String>>,
    suggestion_threshold: Option<f64>,
    max_suggestions: Option<usize>,
    disabled_codes: HashSet<DiagnosticCode>,
}

impl ValidationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, names: Vec<String>) -> Self {
        self.required = Some(names);
        self
    }
    pub fn recommended(mut self, names: Vec<String>) -> Self {
        self.recommended = Some(names);
        self
    }
    pub fn suggestion_threshold(mut self, threshold: f64) -> Self {
        self.suggestion_threshold = Some(threshold);
        self
    }
    pub fn max_suggestions(mut self, limit: usize) -> Self {
        self.max_suggestions = Some(limit);
        self
    }
    pub fn disable(mut self, code: DiagnosticCode) -> Self {
        self.disabled_codes.insert(code);
        self
    }
    pub fn disabled_codes(mut self, codes: impl IntoIterator<Item = DiagnosticCode>) -> Self {
        self.disabled_codes.extend(codes);
        self
    }

    pub fn build(self) -> Result<ValidationConfig, ConfigError> {
        let defaults = ValidationConfig::default();

        let required = self.required.unwrap_or(defaults.required);
        check_names("required", &required)?;
        let recommended = self.recommended.unwrap_or(defaults.recommended);
        check_names("recommended", &recommended)?;

        let threshold = self
            .suggestion_threshold
            .unwrap_or(defaults.suggestions.threshold);
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        Ok(ValidationConfig {
            required,
            recommended,
            suggestions: SuggestionPolicy {
                threshold,
                limit: self.max_suggestions.unwrap_or(defaults.suggestions.limit),
            },
            disabled_codes: self.disabled_codes,
        })
    }
}

fn check_names(list: &'static str, names: &[String]) -> Result<(), ConfigError> {
    match names
        .iter()
        .find(|name| !crate::core::utils::names::is_parameter_name(name))
    {
        Some(name) => Err(ConfigError::InvalidParameterName {
            list,
            name: name.clone(),
        }),
        None => Ok(()),
    }
}
