use crate::core::error::PmanError;
use crate::core::resolve;
use crate::core::schemas::Bucket;
use crate::core::store::Store;

#[derive(clap::Args, Debug)]
pub struct StatusCli {
    /// Project name or alias
    pub project: String,
}

/// Canonical name and status of a project or alias.
pub fn get_status(store: &Store, project: &str) -> Result<(String, String), PmanError> {
    let name = resolve::canonical_name(store, project)?;
    let status = store.get_record(&name, Bucket::Status)?;
    Ok((name, status))
}

pub fn run_status_cli(store: &Store, cli: StatusCli) -> Result<(), PmanError> {
    let (name, status) = get_status(store, &cli.project)?;
    println!("{}: {}", name, status);
    Ok(())
}
