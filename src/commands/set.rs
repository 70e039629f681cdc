use crate::core::error::PmanError;
use crate::core::resolve;
use crate::core::schemas::{Bucket, DEFAULT_STATUS};
use crate::core::status::CONVENTIONAL_STATUSES;
use crate::core::store::Store;

pub const SET_USAGE: &str = "pman set <project_name> <status>";

/// Long help for `pman set`, listing the conventional statuses.
pub fn long_about() -> String {
    let statuses: Vec<String> = CONVENTIONAL_STATUSES
        .iter()
        .map(|s| {
            if *s == DEFAULT_STATUS {
                format!("{} (default)", s)
            } else {
                s.to_string()
            }
        })
        .collect();
    format!(
        "Set the status of a project to a specified status.\n\nUsage:\n    {}\n\nCommon statuses: {}",
        SET_USAGE,
        statuses.join(", ")
    )
}

#[derive(clap::Args, Debug)]
pub struct SetCli {
    /// Set the status of projects interactively
    #[clap(short = 'i', long = "interactive")]
    pub interactive: bool,
    /// Project name (or alias) followed by the new status
    #[clap(value_name = "ARGS")]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOutcome {
    pub project: String,
    pub status: String,
}

/// Set a project's status. `alias` may be a registered alias or a canonical name.
pub fn set_status(
    store: &Store,
    args: &[String],
    interactive: bool,
) -> Result<SetOutcome, PmanError> {
    if interactive {
        return Err(PmanError::NotImplemented);
    }
    let [alias, status] = args else {
        return Err(PmanError::BadUsage("set"));
    };

    let project = resolve::canonical_name(store, alias)?;
    store.update_rec(&project, status, Bucket::Status)?;
    Ok(SetOutcome {
        project,
        status: status.clone(),
    })
}

pub fn run_set_cli(store: &Store, cli: SetCli) -> Result<(), PmanError> {
    match set_status(store, &cli.args, cli.interactive) {
        Ok(outcome) => {
            println!(
                "Project {} set to status {}",
                outcome.project, outcome.status
            );
            Ok(())
        }
        Err(e @ PmanError::BadUsage(_)) => {
            println!("Please provide a project name and a status");
            println!("Usage: {}", SET_USAGE);
            Err(e)
        }
        Err(e) => Err(e),
    }
}
