//! CLI struct definitions for the pman command-line interface.
//!
//! All clap-derived top-level types live here; per-command arguments live
//! beside their implementations in `commands/`.

use crate::commands::{alias, delete, index, info, list, set, status};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "pman",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal project tracker: index your projects, track their status, preview their READMEs."
)]
pub(crate) struct Cli {
    /// Database file (overrides PMAN_DB and the config file)
    #[clap(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Index every project found directly under the given directories
    #[clap(name = "init")]
    Init(index::InitCli),

    /// Index a single directory as a project
    #[clap(name = "add")]
    Add(index::AddCli),

    /// List indexed projects with their status
    #[clap(name = "ls", visible_alias = "list")]
    Ls(list::ListCli),

    /// Set the status of a project
    #[clap(name = "set", long_about = set::long_about())]
    Set(set::SetCli),

    /// Show the status of a project
    #[clap(name = "status", visible_alias = "s")]
    Status(status::StatusCli),

    /// Register a shorthand name for a project
    #[clap(name = "alias")]
    Alias(alias::AliasCli),

    /// Preview a project's README
    #[clap(name = "info")]
    Info(info::InfoCli),

    /// Forget a project and its aliases
    #[clap(name = "delete", visible_alias = "rm")]
    Delete(delete::DeleteCli),

    /// Delete the project database
    #[clap(name = "reset")]
    Reset,

    /// Show version information
    #[clap(name = "version")]
    Version,
}
