//! pman: a personal command-line project tracker.
//!
//! pman records where your projects live, what state they are in, and the
//! shorthand names you use for them, in a local embedded key-value store.
//!
//! # Architecture
//!
//! Three layers, called strictly top-down:
//!
//! - **Commands** ([`crate::commands`]): argument handling and user-facing output
//! - **Helpers** ([`crate::core::resolve`], [`crate::core::time`],
//!   [`crate::core::markdown`], [`crate::core::status`]): alias resolution, README lookup, time labels
//! - **Store** ([`crate::core::store`]): bucketed key-value records in one SQLite file
//!
//! # Examples
//!
//! ```bash
//! # Index every project under ~/code
//! pman init ~/code
//!
//! # Give one a shorthand and mark it in progress
//! pman alias my-long-project-name mlp
//! pman set mlp Ongoing
//!
//! # List what is in progress, then read its README
//! pman ls --filter Ongoing
//! pman info mlp
//! ```

pub mod commands;
pub mod core;
mod cli;

use clap::Parser;
use cli::{Cli, Command};
use colored::Colorize;
use crate::commands::{alias, delete, index, info, list, set, status};
use crate::core::config::Config;
use crate::core::error::PmanError;
use crate::core::logging;
use crate::core::store::Store;

fn reset_store(store: &Store) -> Result<(), PmanError> {
    if store.reset()? {
        println!(
            "{} Removed project database {}",
            "✓".bright_green(),
            store.db_path().display()
        );
    } else {
        println!("No project database at {}", store.db_path().display());
    }
    Ok(())
}

pub fn run() -> Result<(), PmanError> {
    logging::init();
    let cli = Cli::parse();

    if let Command::Version = cli.command {
        println!("v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::resolve(cli.db)?;
    let store = config.store();
    tracing::debug!(db = %store.db_path().display(), "using project database");

    match cli.command {
        Command::Init(c) => index::run_init_cli(&store, c),
        Command::Add(c) => index::run_add_cli(&store, c),
        Command::Ls(c) => list::run_list_cli(&store, c),
        Command::Set(c) => set::run_set_cli(&store, c),
        Command::Status(c) => status::run_status_cli(&store, c),
        Command::Alias(c) => alias::run_alias_cli(&store, c),
        Command::Info(c) => info::run_info_cli(&store, c),
        Command::Delete(c) => delete::run_delete_cli(&store, c),
        Command::Reset => reset_store(&store),
        Command::Version => Ok(()),
    }
}
