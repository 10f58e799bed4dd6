pub mod check;
pub mod explain;
pub mod format;
pub mod list;

use crate::error::Result;
use mdpcheck::Catalog;
use std::path::Path;
use tracing::{debug, info};

/// Loads the catalog named by the configuration, or the built-in one.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            info!("Loading parameter catalog from {:?}", path);
            Catalog::load(path)?
        }
        None => Catalog::builtin()?,
    };
    debug!("Catalog ready with {} parameters.", catalog.len());
    Ok(catalog)
}
