use mdpcheck::core::catalog::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{}': {source}", .path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Found {errors} error(s) and {warnings} warning(s)")]
    ProblemsFound { errors: usize, warnings: usize },

    #[error("File '{}' is not formatted", .0.display())]
    Unformatted(PathBuf),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
