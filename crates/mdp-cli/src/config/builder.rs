use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, OutputSettings};
use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use mdpcheck::{DiagnosticCode, Severity, ValidationConfigBuilder};
use std::path::PathBuf;

/// Values given on the command line. They win over the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub catalog_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub min_severity: Option<Severity>,
    pub deny_warnings: bool,
    pub disabled_codes: Vec<String>,
}

pub fn build_config(overrides: &ConfigOverrides, mut file_config: FileConfig) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let validation_file = file_config.validation.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();
    let catalog_file = file_config.catalog.take().unwrap_or_default();

    let disabled_codes = validation_file
        .disabled_codes
        .iter()
        .chain(&overrides.disabled_codes)
        .map(|code| parse_code(code))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = ValidationConfigBuilder::new().disabled_codes(disabled_codes);
    if let Some(required) = validation_file.required {
        builder = builder.required(required);
    }
    if let Some(recommended) = validation_file.recommended {
        builder = builder.recommended(recommended);
    }
    if let Some(threshold) = validation_file.suggestion_threshold {
        builder = builder.suggestion_threshold(threshold);
    }
    if let Some(limit) = validation_file.max_suggestions {
        builder = builder.max_suggestions(limit);
    }
    let validation = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let file_min_severity = output_file
        .min_severity
        .as_deref()
        .map(|value| {
            value.parse::<Severity>().map_err(|_| {
                CliError::Config(format!(
                    "`output.min-severity` must be information, warning or error, got '{}'",
                    value
                ))
            })
        })
        .transpose()?;

    let output = OutputSettings {
        format: overrides
            .format
            .or(output_file.format)
            .unwrap_or(defaults.format),
        min_severity: overrides
            .min_severity
            .or(file_min_severity)
            .unwrap_or(defaults.min_severity),
        deny_warnings: overrides.deny_warnings
            || output_file.deny_warnings.unwrap_or(defaults.deny_warnings),
    };

    Ok(AppConfig {
        catalog_path: overrides.catalog_path.clone().or(catalog_file.path),
        validation,
        output,
    })
}

fn parse_code(code: &str) -> Result<DiagnosticCode> {
    code.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown diagnostic code '{}'. Known codes: {}",
            code,
            DiagnosticCode::ALL
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::{FileCatalogConfig, FileOutputConfig, FileValidationConfig};

    #[test]
    fn empty_inputs_produce_defaults() {
        let config = build_config(&ConfigOverrides::default(), FileConfig::default()).unwrap();
        assert_eq!(config.validation, mdpcheck::ValidationConfig::default());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.min_severity, Severity::Information);
        assert!(!config.output.deny_warnings);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn file_values_are_applied() {
        let file = FileConfig {
            validation: Some(FileValidationConfig {
                required: Some(vec!["integrator".into(), "nsteps".into()]),
                recommended: Some(vec![]),
                suggestion_threshold: Some(0.8),
                max_suggestions: Some(1),
                disabled_codes: vec!["unknown-parameter".into()],
            }),
            output: Some(FileOutputConfig {
                format: Some(OutputFormat::Json),
                min_severity: Some("warning".into()),
                deny_warnings: Some(true),
            }),
            catalog: Some(FileCatalogConfig {
                path: Some(PathBuf::from("/opt/catalog.toml")),
            }),
        };

        let config = build_config(&ConfigOverrides::default(), file).unwrap();
        assert_eq!(config.validation.required, vec!["integrator", "nsteps"]);
        assert!(config.validation.recommended.is_empty());
        assert_eq!(config.validation.suggestions.threshold, 0.8);
        assert_eq!(config.validation.suggestions.limit, 1);
        assert!(!config.validation.is_enabled(DiagnosticCode::UnknownParameter));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.min_severity, Severity::Warning);
        assert!(config.output.deny_warnings);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/opt/catalog.toml")));
    }

    #[test]
    fn command_line_overrides_file_values() {
        let file = FileConfig {
            output: Some(FileOutputConfig {
                format: Some(OutputFormat::Json),
                min_severity: Some("error".into()),
                deny_warnings: None,
            }),
            catalog: Some(FileCatalogConfig {
                path: Some(PathBuf::from("from-file.toml")),
            }),
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            catalog_path: Some(PathBuf::from("from-cli.toml")),
            format: Some(OutputFormat::Text),
            min_severity: Some(Severity::Warning),
            deny_warnings: true,
            disabled_codes: vec!["duplicate-parameter".into()],
        };

        let config = build_config(&overrides, file).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("from-cli.toml")));
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.min_severity, Severity::Warning);
        assert!(config.output.deny_warnings);
        assert!(!config.validation.is_enabled(DiagnosticCode::DuplicateParameter));
    }

    #[test]
    fn disabled_codes_from_both_sources_are_merged() {
        let file = FileConfig {
            validation: Some(FileValidationConfig {
                disabled_codes: vec!["missing-recommended-parameter".into()],
                ..Default::default()
            }),
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            disabled_codes: vec!["unknown-parameter".into()],
            ..Default::default()
        };

        let config = build_config(&overrides, file).unwrap();
        assert!(!config
            .validation
            .is_enabled(DiagnosticCode::MissingRecommendedParameter));
        assert!(!config.validation.is_enabled(DiagnosticCode::UnknownParameter));
        assert!(config.validation.is_enabled(DiagnosticCode::DuplicateParameter));
    }

    #[test]
    fn unknown_code_is_a_config_error() {
        let overrides = ConfigOverrides {
            disabled_codes: vec!["no-such-code".into()],
            ..Default::default()
        };
        let result = build_config(&overrides, FileConfig::default());
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("no-such-code")));
    }

    #[test]
    fn invalid_threshold_and_severity_are_config_errors() {
        let file = FileConfig {
            validation: Some(FileValidationConfig {
                suggestion_threshold: Some(1.5),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&ConfigOverrides::default(), file),
            Err(CliError::Config(_))
        ));

        let file = FileConfig {
            output: Some(FileOutputConfig {
                min_severity: Some("fatal".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&ConfigOverrides::default(), file),
            Err(CliError::Config(msg)) if msg.contains("fatal")
        ));
    }
}
