//! CLI implementation for `camkit update`
//!
//! Re-synchronizes the external source tree against the manifest
//! recorded in the project's camkes.toml.

use anyhow::{Context, Result};

use crate::cli::output::{create_spinner, print_success};
use crate::core::project::Project;
use crate::infra::process;

/// Execute the update command
pub async fn execute(jobs: usize) -> Result<()> {
    let project = Project::locate()?;
    let manifest = project
        .manifest()
        .with_context(|| "Failed to read the project manifest")?;

    let spinner = create_spinner("Synchronizing external source tree...");
    let result = process::fetch_sources(
        &project.build_tree(),
        &manifest.source.manifest_url,
        &manifest.source.manifest_name,
        jobs,
    );
    spinner.finish_and_clear();
    result?;

    print_success("Source tree synchronized");
    Ok(())
}
