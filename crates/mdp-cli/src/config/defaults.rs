use crate::cli::OutputFormat;
use mdpcheck::Severity;

pub struct DefaultsConfig {
    pub format: OutputFormat,
    pub min_severity: Severity,
    pub deny_warnings: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            min_severity: Severity::Information,
            deny_warnings: false,
        }
    }
}
