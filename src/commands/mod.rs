//! Command dispatch and handlers.

pub mod discover;
pub mod install;
pub mod locate;

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::{Command, ProjectArgs};
use crate::composer::repository::ENV_VENDOR_DIR;
use crate::composer::ProjectLayout;
use crate::config::InstallerConfig;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler using live adapters.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    load_env_file(&absolute(&command.project().working_dir)?);
    let ctx = ServiceContext::live();
    let config = InstallerConfig::from_env();
    let vendor_env = env::var(ENV_VENDOR_DIR).ok();
    dispatch_with_context(command, &ctx, config, vendor_env)
}

/// Dispatch a command with the given service context and configuration.
///
/// # Errors
///
/// Returns an error string if the project cannot be resolved or the handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: InstallerConfig,
    vendor_env: Option<String>,
) -> Result<(), String> {
    let layout = resolve_layout(ctx, command.project(), vendor_env)?;
    match command {
        Command::Install { no_lock, .. } => {
            install::run(ctx, &config.with_no_lock(*no_lock), &layout)
        }
        Command::Discover { .. } => discover::run(ctx, &config, &layout),
        Command::Locate { .. } => {
            locate::run(ctx, &config, &layout);
            Ok(())
        }
    }
}

fn resolve_layout(
    ctx: &ServiceContext,
    project: &ProjectArgs,
    vendor_env: Option<String>,
) -> Result<ProjectLayout, String> {
    let working_dir = absolute(&project.working_dir)?;
    ProjectLayout::resolve(ctx.fs.as_ref(), &working_dir, project.vendor_dir.as_deref(), vendor_env)
        .map_err(|e| e.to_string())
}

/// Load `<working_dir>/.env` into the process environment.
///
/// Variables already set in the environment are not overridden. Returns
/// whether a file was loaded; a missing or unparsable file is ignored.
fn load_env_file(working_dir: &Path) -> bool {
    let path = working_dir.join(".env");
    match dotenvy::from_path(&path) {
        Ok(()) => true,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no .env loaded");
            false
        }
    }
}

fn absolute(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|e| format!("Failed to read current directory: {e}"))?;
    Ok(cwd.join(path))
}
