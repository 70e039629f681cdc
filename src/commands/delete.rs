use crate::core::error::PmanError;
use crate::core::resolve;
use crate::core::schemas::Bucket;
use crate::core::store::Store;

#[derive(clap::Args, Debug)]
pub struct DeleteCli {
    /// Project name or alias
    pub project: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub project: String,
    pub aliases_removed: Vec<String>,
}

/// Forget a project: its path, status, last-edited entry, and every alias
/// pointing at it. The directory on disk is left alone.
pub fn delete_project(store: &Store, project: &str) -> Result<DeleteReport, PmanError> {
    let (name, _) = resolve::resolve_project(store, project)?.into_project()?;

    let aliases_removed = store.purge_key(
        &name,
        &[Bucket::ProjectPaths, Bucket::Status, Bucket::LastEdited],
        Bucket::ProjectAliases,
    )?;

    Ok(DeleteReport {
        project: name,
        aliases_removed,
    })
}

pub fn run_delete_cli(store: &Store, cli: DeleteCli) -> Result<(), PmanError> {
    let report = delete_project(store, &cli.project)?;
    println!("Deleted project {}", report.project);
    if !report.aliases_removed.is_empty() {
        println!("  removed aliases: {}", report.aliases_removed.join(", "));
    }
    Ok(())
}
