//! Runtime configuration: where the database lives.
//!
//! Precedence: `--db` flag, then `PMAN_DB`, then `db_path` in
//! `<config_dir>/pman/config.toml`, then `<data_dir>/pman/projects.db`.

use crate::core::error::PmanError;
use crate::core::schemas;
use crate::core::store::Store;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_ENV_VAR: &str = "PMAN_DB";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of the optional config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub db_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    pub fn resolve(db_flag: Option<PathBuf>) -> Result<Self, PmanError> {
        let env_db = std::env::var_os(DB_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let file = match default_config_path() {
            Some(path) if db_flag.is_none() && env_db.is_none() => load_config_file(&path)?,
            _ => ConfigFile::default(),
        };
        Self::from_sources(db_flag, env_db, file)
    }

    pub fn from_sources(
        db_flag: Option<PathBuf>,
        env_db: Option<PathBuf>,
        file: ConfigFile,
    ) -> Result<Self, PmanError> {
        let db_path = match db_flag.or(env_db).or(file.db_path) {
            Some(p) => expand_home(&p),
            None => default_db_path()?,
        };
        Ok(Self { db_path })
    }

    pub fn store(&self) -> Store {
        Store::new(self.db_path.clone())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pman").join(CONFIG_FILE_NAME))
}

/// Load the config file. A missing file is an empty config.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, PmanError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let content = fs::read_to_string(path).map_err(PmanError::IoError)?;
    toml::from_str(&content)
        .map_err(|e| PmanError::ConfigError(format!("{}: {}", path.display(), e)))
}

fn default_db_path() -> Result<PathBuf, PmanError> {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|d| d.join("pman").join(schemas::DEFAULT_DB_NAME))
        .ok_or_else(|| {
            PmanError::ConfigError(
                "could not determine a data directory; pass --db or set PMAN_DB".to_string(),
            )
        })
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
