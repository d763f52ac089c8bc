//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `pgmod`.
#[derive(Debug, Parser)]
#[command(
    name = "pgmod",
    version,
    about = "Register pg-module packages in the PgFramework bootstrap file"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Locates the Composer project to operate on.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Project directory holding `composer.json`.
    #[arg(short = 'd', long, default_value = ".")]
    pub working_dir: PathBuf,
    /// Vendor directory; overrides `COMPOSER_VENDOR_DIR` and `composer.json`.
    #[arg(long)]
    pub vendor_dir: Option<PathBuf>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Discover modules and register them in the bootstrap file (post-install hook).
    Install {
        /// Project location.
        #[command(flatten)]
        project: ProjectArgs,
        /// Rewrite the bootstrap file without taking an exclusive lock.
        #[arg(long)]
        no_lock: bool,
    },
    /// List discovered modules without writing anything.
    Discover {
        /// Project location.
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Print the path of the bootstrap file.
    Locate {
        /// Project location.
        #[command(flatten)]
        project: ProjectArgs,
    },
}

impl Command {
    /// Project arguments shared by every subcommand.
    #[must_use]
    pub fn project(&self) -> &ProjectArgs {
        match self {
            Self::Install { project, .. } | Self::Discover { project } | Self::Locate { project } => {
                project
            }
        }
    }
}
