//! Locating and reading the `config.toml` that styles rendered boards.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};

use fenboard::{FenboardError, config::AppConfig};

/// Checked before the platform directory, relative to the working directory.
const LOCAL_CONFIG: &str = "fenboard/config.toml";

/// Where a configuration file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    /// Given with `--config`; it must exist.
    Explicit,
    Local,
    Platform,
}

/// Loads the board configuration.
///
/// An explicit path wins. Otherwise `fenboard/config.toml` in the working
/// directory is tried, then `config.toml` in the platform config directory.
/// With no file anywhere the defaults apply.
///
/// # Errors
///
/// Returns [`FenboardError::Config`] when the explicit file is missing or
/// any found file is not a valid configuration.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, FenboardError> {
    let found = match explicit_path {
        Some(path) => Some((ConfigSource::Explicit, path.as_ref().to_path_buf())),
        None => discover(),
    };

    let Some((source, path)) = found else {
        debug!("No configuration file found, using defaults");
        return Ok(AppConfig::default());
    };

    info!(path:? = path, source:? = source; "Loading configuration");
    read_config(&path)
}

fn discover() -> Option<(ConfigSource, PathBuf)> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some((ConfigSource::Local, local));
    }

    let Some(dirs) = ProjectDirs::from("com", "fenboard", "fenboard") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };
    let platform = dirs.config_dir().join("config.toml");
    if platform.is_file() {
        return Some((ConfigSource::Platform, platform));
    }
    debug!(path:? = platform; "No platform configuration file");
    None
}

fn read_config(path: &Path) -> Result<AppConfig, FenboardError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => {
            FenboardError::Config(format!("`{}` does not exist", path.display()))
        }
        _ => FenboardError::Io(err),
    })?;

    toml::from_str(&content)
        .map_err(|err| FenboardError::Config(format!("`{}`: {err}", path.display())))
}
