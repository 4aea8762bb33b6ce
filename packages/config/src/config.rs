// ABOUTME: Runtime configuration loaded from environment variables
// ABOUTME: Database location, settings option name and password override

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::constants::{
    DATABASE_FILE_NAME, DATA_DIR_NAME, DEFAULT_SETTINGS_KEY, HOME, OPML_BLOGROLL_DB,
    OPML_BLOGROLL_SETTINGS_KEY, USERPROFILE,
};
use crate::password::PasswordOverride;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to determine home directory; set {0} explicitly")]
    HomeDirUnavailable(&'static str),
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),
    #[error("{0} contains invalid unicode")]
    InvalidUnicode(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub settings_key: String,
    pub password_override: PasswordOverride,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_path = match env::var_os(OPML_BLOGROLL_DB) {
            Some(path) if path.is_empty() => return Err(ConfigError::EmptyValue(OPML_BLOGROLL_DB)),
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let settings_key = match env::var(OPML_BLOGROLL_SETTINGS_KEY) {
            Ok(key) if key.trim().is_empty() => {
                return Err(ConfigError::EmptyValue(OPML_BLOGROLL_SETTINGS_KEY))
            }
            Ok(key) => key.trim().to_string(),
            Err(env::VarError::NotPresent) => DEFAULT_SETTINGS_KEY.to_string(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidUnicode(OPML_BLOGROLL_SETTINGS_KEY))
            }
        };

        let config = Config {
            database_path,
            settings_key,
            password_override: PasswordOverride::from_env(),
        };
        debug!(
            "Loaded config: database={}, settings_key={}",
            config.database_path.display(),
            config.settings_key
        );

        Ok(config)
    }
}

/// `~/.opml-blogroll/blogroll.db`
fn default_database_path() -> Result<PathBuf, ConfigError> {
    // HOME first so tests can redirect it
    let home = env::var_os(HOME)
        .or_else(|| env::var_os(USERPROFILE))
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .ok_or(ConfigError::HomeDirUnavailable(OPML_BLOGROLL_DB))?;

    Ok(home.join(DATA_DIR_NAME).join(DATABASE_FILE_NAME))
}
