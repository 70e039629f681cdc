use crate::core::error::PmanError;
use crate::core::schemas::Bucket;
use crate::core::store::Store;
use colored::Colorize;
use std::collections::HashMap;

#[derive(clap::Args, Debug)]
pub struct AliasCli {
    /// Canonical project name
    pub project: String,
    /// Shorthand to register for the project
    pub alias: String,
}

/// Register `alias` for an indexed project. An alias may not shadow a
/// canonical project name; re-registering an alias retargets it.
pub fn set_alias(store: &Store, project: &str, alias: &str) -> Result<(), PmanError> {
    if alias.trim().is_empty() {
        return Err(PmanError::ValidationError("alias must not be empty".into()));
    }
    match store.get_record(project, Bucket::ProjectPaths) {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {
            return Err(PmanError::UnknownProject {
                name: project.to_string(),
            });
        }
        Err(e) => return Err(e),
    }
    match store.get_record(alias, Bucket::ProjectPaths) {
        Ok(_) => {
            return Err(PmanError::ValidationError(format!(
                "'{}' is already a project name and cannot be used as an alias",
                alias
            )));
        }
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e),
    }

    let rec = HashMap::from([(alias.to_string(), project.to_string())]);
    store.write_to_db(&rec, Bucket::ProjectAliases)
}

pub fn run_alias_cli(store: &Store, cli: AliasCli) -> Result<(), PmanError> {
    set_alias(store, &cli.project, &cli.alias)?;
    println!(
        "{} Aliased {} -> {}",
        "✓".bright_green(),
        cli.alias.bright_cyan(),
        cli.project
    );
    Ok(())
}
