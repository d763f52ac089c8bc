//! `discover`: lists modules without touching the bootstrap file.

use crate::composer::ProjectLayout;
use crate::config::InstallerConfig;
use crate::context::ServiceContext;
use crate::pipeline::Pipeline;

/// Prints each discovered module's fully-qualified name.
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
    let modules = Pipeline::new(ctx, config).discover(&packages).map_err(|e| e.to_string())?;
    if modules.is_empty() {
        ctx.say(format!("{}s not found in packages", config.marker_type));
        return Ok(());
    }
    for (fqcn, _) in modules.iter() {
        ctx.say(fqcn);
    }
    Ok(())
}
