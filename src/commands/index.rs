//! Project discovery and registration (`pman init`, `pman add`).
//!
//! A directory is a project when it holds a `README.md` or a `.git` entry.
//! Its basename becomes the canonical project name and its canonical
//! absolute path is stored in the project paths bucket. Newly seen projects
//! get the `Indexed` status; existing statuses are never overwritten.

use crate::core::error::PmanError;
use crate::core::resolve::README_FILE_NAME;
use crate::core::schemas::{Bucket, DEFAULT_STATUS};
use crate::core::store::Store;
use crate::core::time;
use colored::Colorize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(clap::Args, Debug)]
pub struct InitCli {
    /// Directories whose immediate subdirectories are projects
    #[clap(required = true, value_name = "DIR")]
    pub dirs: Vec<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct AddCli {
    /// Project directory (defaults to the current directory)
    #[clap(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct IndexReport {
    pub projects: BTreeMap<String, PathBuf>,
    pub newly_indexed: usize,
}

pub fn is_project_dir(dir: &Path) -> bool {
    dir.join(README_FILE_NAME).exists() || dir.join(".git").exists()
}

/// Immediate subdirectories of `root` that look like projects, keyed by name.
/// Hidden directories are skipped.
pub fn discover_projects(root: &Path) -> Result<BTreeMap<String, PathBuf>, PmanError> {
    let root = canonical_dir(root)?;
    let mut found = BTreeMap::new();
    for entry in fs::read_dir(&root).map_err(PmanError::IoError)? {
        let entry = entry.map_err(PmanError::IoError)?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = %path.display(), "skipping directory with a non-UTF-8 path");
            continue;
        };
        if name.starts_with('.') || !path.is_dir() || !is_project_dir(&path) {
            continue;
        }
        found.insert(name, path);
    }
    Ok(found)
}

/// Index every project below each of `dirs`, then refresh last-edited times.
pub fn index_dirs(store: &Store, dirs: &[PathBuf]) -> Result<IndexReport, PmanError> {
    let mut projects: BTreeMap<String, PathBuf> = BTreeMap::new();
    for dir in dirs {
        for (name, path) in discover_projects(dir)? {
            if let Some(prev) = projects.get(&name) {
                tracing::warn!(
                    project = %name,
                    previous = %prev.display(),
                    replacement = %path.display(),
                    "duplicate project name, keeping the later directory"
                );
            }
            projects.insert(name, path);
        }
    }

    let newly_indexed = register(store, &projects)?;
    time::refresh_last_edited(store)?;
    Ok(IndexReport {
        projects,
        newly_indexed,
    })
}

/// Index a single directory as a project. Returns its name, path, and whether it is new.
pub fn add_project(store: &Store, dir: &Path) -> Result<(String, PathBuf, bool), PmanError> {
    let path = canonical_dir(dir)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| {
            PmanError::PathError(format!("{} has no directory name", path.display()))
        })?;

    let projects = BTreeMap::from([(name.clone(), path.clone())]);
    let is_new = register(store, &projects)? > 0;

    let edited = HashMap::from([(
        name.clone(),
        time::format_last_edited(time::latest_file_mtime(&path)),
    )]);
    store.write_to_db(&edited, Bucket::LastEdited)?;
    Ok((name, path, is_new))
}

/// Store paths for `projects` and default statuses for the new ones.
fn register(store: &Store, projects: &BTreeMap<String, PathBuf>) -> Result<usize, PmanError> {
    let paths: HashMap<String, String> = projects
        .iter()
        .map(|(name, path)| (name.clone(), path.to_string_lossy().to_string()))
        .collect();
    store.write_to_db(&paths, Bucket::ProjectPaths)?;

    let existing = store.get_all_records(Bucket::Status)?;
    let fresh: HashMap<String, String> = projects
        .keys()
        .filter(|name| !existing.contains_key(*name))
        .map(|name| (name.clone(), DEFAULT_STATUS.to_string()))
        .collect();
    store.write_to_db(&fresh, Bucket::Status)?;
    Ok(fresh.len())
}

fn canonical_dir(dir: &Path) -> Result<PathBuf, PmanError> {
    let path = fs::canonicalize(dir)
        .map_err(|e| PmanError::PathError(format!("{}: {}", dir.display(), e)))?;
    if !path.is_dir() {
        return Err(PmanError::PathError(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    if path.to_str().is_none() {
        return Err(PmanError::PathError(format!(
            "{} is not valid UTF-8",
            path.display()
        )));
    }
    Ok(path)
}

pub fn run_init_cli(store: &Store, cli: InitCli) -> Result<(), PmanError> {
    let report = index_dirs(store, &cli.dirs)?;
    if report.projects.is_empty() {
        println!("No projects found under the given directories");
        return Ok(());
    }
    println!(
        "{} Indexed {} projects ({} new)",
        "✓".bright_green(),
        report.projects.len(),
        report.newly_indexed
    );
    Ok(())
}

pub fn run_add_cli(store: &Store, cli: AddCli) -> Result<(), PmanError> {
    let dir = match cli.dir {
        Some(d) => d,
        None => std::env::current_dir()?,
    };
    let (name, path, is_new) = add_project(store, &dir)?;
    if is_new {
        println!("{} Added {} ({})", "✓".bright_green(), name, path.display());
    } else {
        println!("Updated path of {} to {}", name, path.display());
    }
    Ok(())
}
