//! qforms CLI library.
//!
//! This library provides the core functionality for the qforms command-line
//! interface, including run configuration, corpus discovery, CSV export and
//! output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
