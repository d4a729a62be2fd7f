//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use latexcmd::{LatexCmdError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for LatexCmdError {
    fn from(err: ConfigError) -> Self {
        LatexCmdError::Config(err.to_string())
    }
}

/// Configuration file looked up relative to the working directory.
const LOCAL_CONFIG: &str = "latexcmd/config.toml";

/// Load the configuration for this run.
///
/// An explicit path must exist. Without one, the first existing file among
/// `latexcmd/config.toml` and the platform config directory is used, and the
/// defaults apply when neither exists.
///
/// # Errors
///
/// Returns [`LatexCmdError::Config`] if the explicit file is missing or a
/// file cannot be parsed, and [`LatexCmdError::Io`] if it cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, LatexCmdError> {
    let path = match explicit_path {
        Some(path) => {
            let path = path.as_ref();
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.to_path_buf()).into());
            }
            path.to_path_buf()
        }
        None => match discover_config() {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path:? = path; "Loading configuration");
    let content = fs::read_to_string(&path)?;
    parse_config(&content)
}

/// Locations searched for a configuration file, most specific first.
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "latexcmd", "latexcmd") {
        Some(dirs) => candidates.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    candidates
}

/// Return the first configuration candidate that exists.
fn discover_config() -> Option<PathBuf> {
    config_candidates().into_iter().find(|candidate| {
        let found = candidate.exists();
        debug!(path:? = candidate, found; "Checked configuration location");
        found
    })
}

/// Parse TOML configuration text.
fn parse_config(content: &str) -> Result<AppConfig, LatexCmdError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(config)
}
