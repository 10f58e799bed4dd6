use crate::cli::OutputFormat;
use mdpcheck::{Severity, ValidationConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub min_severity: Severity,
    pub deny_warnings: bool,
}

/// Fully merged settings for one invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` selects the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub validation: ValidationConfig,
    pub output: OutputSettings,
}
