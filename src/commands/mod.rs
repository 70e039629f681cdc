//! Subcommand implementations. Each module owns its clap arguments, the
//! library function the command wraps, and a `run_*_cli` entry point.

pub mod alias;
pub mod delete;
pub mod index;
pub mod info;
pub mod list;
pub mod set;
pub mod status;
