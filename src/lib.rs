//! Core library entry for the `pgmod` CLI.
//!
//! `pgmod` runs as a Composer post-install hook. It finds installed packages
//! of type `pg-module`, scans their PSR-4 source directories for classes
//! extending `Module`, and appends any it has not seen before to the
//! generated `src/Bootstrap/PgFramework.php` file.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod composer;
pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod ports;

pub use error::{InstallerError, Result};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
