//! Project name resolution: canonical names, aliases, and README lookup.

use crate::core::error::PmanError;
use crate::core::schemas::Bucket;
use crate::core::store::Store;
use std::fs;
use std::path::{Path, PathBuf};

pub const README_FILE_NAME: &str = "README.md";

/// Outcome of resolving a user-supplied project reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The input is a canonical project name.
    Direct { name: String, path: PathBuf },
    /// The input is an alias of an indexed project.
    Aliased {
        alias: String,
        name: String,
        path: PathBuf,
    },
    /// The input is an alias whose target has no indexed path.
    DanglingAlias { alias: String, target: String },
    /// Neither a project nor an alias.
    Unresolved { name: String },
}

impl Resolution {
    pub fn into_project(self) -> Result<(String, PathBuf), PmanError> {
        match self {
            Resolution::Direct { name, path } | Resolution::Aliased { name, path, .. } => {
                Ok((name, path))
            }
            Resolution::DanglingAlias { alias, target } => {
                tracing::warn!(project = %target, "not a valid project");
                Err(PmanError::DanglingAlias { alias, target })
            }
            Resolution::Unresolved { name } => {
                tracing::warn!(project = %name, "not a valid project");
                Err(PmanError::UnknownProject { name })
            }
        }
    }
}

/// Try the project paths bucket first, then the alias bucket.
pub fn resolve_project(store: &Store, name: &str) -> Result<Resolution, PmanError> {
    if let Some(path) = lookup(store, name, Bucket::ProjectPaths)? {
        return Ok(Resolution::Direct {
            name: name.to_string(),
            path: PathBuf::from(path),
        });
    }

    let Some(target) = lookup(store, name, Bucket::ProjectAliases)? else {
        return Ok(Resolution::Unresolved {
            name: name.to_string(),
        });
    };

    match lookup(store, &target, Bucket::ProjectPaths)? {
        Some(path) => Ok(Resolution::Aliased {
            alias: name.to_string(),
            name: target,
            path: PathBuf::from(path),
        }),
        None => Ok(Resolution::DanglingAlias {
            alias: name.to_string(),
            target,
        }),
    }
}

/// Map an alias to its project name, or return the input unchanged when it is
/// not an alias.
pub fn canonical_name(store: &Store, alias: &str) -> Result<String, PmanError> {
    Ok(lookup(store, alias, Bucket::ProjectAliases)?.unwrap_or_else(|| alias.to_string()))
}

/// Path to the project's README. The path is returned only if the file exists.
pub fn get_project_path(store: &Store, project_name: &str) -> Result<PathBuf, PmanError> {
    let (_, dir) = resolve_project(store, project_name)?.into_project()?;
    let readme = dir.join(README_FILE_NAME);
    if !readme.exists() {
        return Err(PmanError::ReadmeNotFound(readme));
    }
    Ok(readme)
}

/// Raw README bytes, or a placeholder document when the project has no README.
pub fn read_readme(store: &Store, project_name: &str) -> Result<Vec<u8>, PmanError> {
    let path = match get_project_path(store, project_name) {
        Ok(p) => p,
        Err(PmanError::ReadmeNotFound(_)) => {
            return Ok(missing_readme_placeholder(project_name).into_bytes());
        }
        Err(e) => return Err(e),
    };
    read_file(&path, project_name)
}

pub fn missing_readme_placeholder(project_name: &str) -> String {
    format!("# README does not exist for {}", project_name)
}

fn read_file(path: &Path, project_name: &str) -> Result<Vec<u8>, PmanError> {
    fs::read(path).map_err(|source| PmanError::ReadReadme {
        project: project_name.to_string(),
        source,
    })
}

/// Single lookup where a key miss is `None` and every other failure is an error.
fn lookup(store: &Store, key: &str, bucket: Bucket) -> Result<Option<String>, PmanError> {
    match store.get_record(key, bucket) {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
