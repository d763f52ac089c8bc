//! `locate`: prints where the bootstrap file lives.

use crate::bootstrap::ConfigSynthesizer;
use crate::composer::ProjectLayout;
use crate::config::InstallerConfig;
use crate::context::ServiceContext;

/// Prints the bootstrap file path for the project.
pub fn run(ctx: &ServiceContext, config: &InstallerConfig, layout: &ProjectLayout) {
    let path = ConfigSynthesizer::locate(&layout.project_root, &config.config_file);
    ctx.say(path.display().to_string());
}
