//! CLI implementation for `camkit build`
//!
//! Loads a named configuration, runs the external build, archives the
//! produced images under the configuration name, and reports the
//! classified artifact set. The build tool's exit status itself is not
//! interpreted; a broken build surfaces through image classification.

use anyhow::{Context, Result};

use crate::cli::output::{print_detail, print_success};
use crate::core::config_store::ConfigStore;
use crate::core::images;
use crate::core::project::Project;
use crate::infra::process;

/// Execute the build command
pub async fn execute(config: &str, jobs: usize) -> Result<()> {
    let project = Project::locate()?;
    let store = ConfigStore::for_project(&project);
    store
        .load(config)
        .with_context(|| format!("Failed to load configuration '{config}'"))?;

    tracing::info!("Building configuration '{config}' with {jobs} jobs");
    process::run_build(&project.build_tree(), jobs)?;

    let archive_dir = images::archive(config, &project.build_images_dir(), &project.images_dir())
        .with_context(|| format!("Failed to archive images for configuration '{config}'"))?;
    let artifacts = images::locate_artifacts(&archive_dir)
        .with_context(|| format!("Build produced no valid image set for configuration '{config}'"))?;

    print_success(&format!("Built configuration '{config}'"));
    print_detail(&format!("App image: {}", artifacts.app.display()));
    match artifacts.kernel {
        Some(kernel) => print_detail(&format!("Kernel image: {}", kernel.display())),
        None => print_detail("Kernel image: none (external kernel)"),
    }
    Ok(())
}
