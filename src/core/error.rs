use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PmanError {
    #[error("SQLite error: {0}")]
    RusqliteError(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Path error: {0}")]
    PathError(String),
    #[error("Not found: key '{key}' in bucket '{bucket}'")]
    NotFound { bucket: String, key: String },
    #[error("project: {name} not a valid project (no project or alias with that name)")]
    UnknownProject { name: String },
    #[error("project: {target} not a valid project (alias '{alias}' points at an unindexed project)")]
    DanglingAlias { alias: String, target: String },
    #[error("README not found at {}", .0.display())]
    ReadmeNotFound(PathBuf),
    #[error("error reading README for {project}: {source}")]
    ReadReadme {
        project: String,
        #[source]
        source: io::Error,
    },
    #[error("error beautifying markdown: {0}")]
    Render(String),
    #[error("bad usage of {0} command")]
    BadUsage(&'static str),
    #[error("flag not implemented yet")]
    NotImplemented,
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl PmanError {
    /// True for a plain key miss in a bucket.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PmanError::NotFound { .. })
    }
}
