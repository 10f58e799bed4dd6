use super::definition::{ParameterDefinition, ParameterType};
use crate::core::utils::names;
use itertools::Itertools;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../../../data/mdp_parameters.toml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate definition for parameter '{0}'")]
    DuplicateParameter(String),
    #[error("Invalid parameter name '{0}' (expected [A-Za-z][A-Za-z0-9_-]*)")]
    InvalidName(String),
    #[error("Enum parameter '{0}' does not list any valid values")]
    EmptyEnum(String),
    #[error("Parameter '{name}' has an empty range (min {min} > max {max})")]
    InvalidRange { name: String, min: f64, max: f64 },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "parameter")]
    parameters: Vec<ParameterDefinition>,
}

/// The immutable table of recognized parameters.
///
/// Definitions keep the order in which they were loaded, which is also the order
/// of [`Catalog::all_names`] and of parameter-name completions. The catalog is
/// `Send + Sync` and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    parameters: Vec<ParameterDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Parses the GROMACS 2025.2 parameter table shipped with the library.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded table is corrupt, which the test suite guards
    /// against.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Loads a catalog from a TOML file with one `[[parameter]]` table per entry.
    ///
    /// # Arguments
    ///
    /// * `path` - The catalog file to read.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, and any error of
    /// [`Catalog::from_toml_str`] otherwise.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading parameter catalog from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_definitions(file.parameters)
    }

    /// Builds a catalog from definitions, rejecting tables that would make lookups
    /// or validation ambiguous.
    pub fn from_definitions(parameters: Vec<ParameterDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(parameters.len());
        let mut seen_keys = HashSet::with_capacity(parameters.len());

        for (position, definition) in parameters.iter().enumerate() {
            if !names::is_parameter_name(&definition.name) {
                return Err(CatalogError::InvalidName(definition.name.clone()));
            }
            if !seen_keys.insert(names::hyphenated(&definition.name)) {
                return Err(CatalogError::DuplicateParameter(definition.name.clone()));
            }
            if definition.kind == ParameterType::Enum && definition.valid_values.is_empty() {
                return Err(CatalogError::EmptyEnum(definition.name.clone()));
            }
            if let Some(range) = &definition.range {
                if let (Some(min), Some(max)) = (range.min, range.max) {
                    if min > max {
                        return Err(CatalogError::InvalidRange {
                            name: definition.name.clone(),
                            min,
                            max,
                        });
                    }
                }
            }
            index.insert(definition.name.clone(), position);
        }

        debug!("Parameter catalog ready with {} definitions", parameters.len());
        Ok(Self { parameters, index })
    }

    /// Finds the definition for `name`.
    ///
    /// The literal spelling is tried first, then the hyphenated and underscored
    /// variants, so `tau_t` and `tau-t` resolve to the same definition.
    pub fn lookup(&self, name: &str) -> Option<&ParameterDefinition> {
        self.index
            .get(name)
            .or_else(|| self.index.get(&names::hyphenated(name)))
            .or_else(|| self.index.get(&names::underscored(name)))
            .map(|&position| &self.parameters[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// The catalog spelling of `name`, if the parameter is known.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|definition| definition.name.as_str())
    }

    /// All canonical names in catalog order.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|definition| definition.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParameterDefinition> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Distinct category tags in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .map(|definition| definition.category.as_str())
            .unique()
            .collect()
    }

    pub fn by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ParameterDefinition> + 'a {
        self.parameters
            .iter()
            .filter(move |definition| definition.category == category)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ParameterDefinition;
    type IntoIter = std::slice::Iter<'a, ParameterDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
