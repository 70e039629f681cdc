//! Core modules: the key-value store adapter and the stateless helpers
//! built on top of it.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod output;
pub mod resolve;
pub mod schemas;
pub mod status;
pub mod store;
pub mod time;
