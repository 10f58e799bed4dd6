use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileValidationConfig {
    pub required: Option<Vec<String>>,
    pub recommended: Option<Vec<String>>,
    pub suggestion_threshold: Option<f64>,
    pub max_suggestions: Option<usize>,
    #[serde(default)]
    pub disabled_codes: Vec<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    pub min_severity: Option<String>,
    pub deny_warnings: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileCatalogConfig {
    pub path: Option<PathBuf>,
}

/// The contents of an `mdpcheck.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub validation: Option<FileValidationConfig>,
    pub output: Option<FileOutputConfig>,
    pub catalog: Option<FileCatalogConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        config.resolve_relative_paths(path);
        Ok(config)
    }

    /// A relative catalog path is taken relative to the config file's directory.
    fn resolve_relative_paths(&mut self, config_path: &Path) {
        let base = config_path.parent().unwrap_or(Path::new(""));
        if let Some(catalog_path) = self.catalog.as_mut().and_then(|c| c.path.as_mut()) {
            if catalog_path.is_relative() {
                *catalog_path = base.join(&*catalog_path);
            }
        }
    }
}
