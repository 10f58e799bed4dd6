pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

use crate::error::Result;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use builder::{ConfigOverrides, build_config};
pub use file::FileConfig;
pub use models::AppConfig;

pub const LOCAL_CONFIG_NAME: &str = "mdpcheck.toml";

/// Picks the configuration file for this run: an explicit path, else
/// `./mdpcheck.toml`, else `config.toml` in the user configuration directory.
/// Only the explicit path is allowed to be missing on disk.
pub fn locate_config_file(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = working_dir.join(LOCAL_CONFIG_NAME);
    if local.is_file() {
        return Some(local);
    }
    ProjectDirs::from("org", "mdpcheck", "mdpcheck")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .filter(|path| path.is_file())
}

pub fn load(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let working_dir = std::env::current_dir()?;
    let file_config = match locate_config_file(explicit, &working_dir) {
        Some(path) => {
            debug!("Using configuration file {:?}", path);
            FileConfig::from_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults.");
            FileConfig::default()
        }
    };
    build_config(overrides, file_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn explicit_path_wins_even_if_missing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(LOCAL_CONFIG_NAME), "").unwrap();
        let explicit = dir.path().join("elsewhere.toml");
        assert_eq!(
            locate_config_file(Some(&explicit), dir.path()),
            Some(explicit)
        );
    }

    #[test]
    fn local_file_is_found() {
        let dir = tempdir().unwrap();
        let local = dir.path().join(LOCAL_CONFIG_NAME);
        fs::write(&local, "[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(locate_config_file(None, dir.path()), Some(local));
    }

    #[test]
    fn explicit_missing_file_fails_to_load() {
        let dir = tempdir().unwrap();
        let result = load(
            Some(&dir.path().join("absent.toml")),
            &ConfigOverrides::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn explicit_file_is_merged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[validation]\nrequired = [\"nsteps\"]\n").unwrap();
        let config = load(Some(&path), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.validation.required, vec!["nsteps"]);
    }
}
