//! `install`: the post-install hook entry point.

use crate::composer::ProjectLayout;
use crate::config::InstallerConfig;
use crate::context::ServiceContext;
use crate::pipeline::Pipeline;

/// Discovers modules in the installed packages and registers them.
///
/// Every pipeline outcome, including "nothing found", is a success.
///
/// # Errors
///
/// Returns an error string when package metadata or the filesystem fails.
pub fn run(
    ctx: &ServiceContext,
    config: &InstallerConfig,
    layout: &ProjectLayout,
) -> Result<(), String> {
    let packages = layout.installed_packages(ctx.fs.as_ref()).map_err(|e| e.to_string())?;
    Pipeline::new(ctx, config)
        .run(&layout.project_root, &packages)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
