//! CLI implementation for `camkit init`
//!
//! Sets up the external build system inside an existing project:
//! fetches the source tree named by camkes.toml, renders the build
//! templates, and links the project sources into the build tree.

use anyhow::{Context, Result};

use crate::cli::output::{create_spinner, print_detail, print_success};
use crate::config::defaults;
use crate::core::project::Project;
use crate::core::scaffold::{self, InitOptions};
use crate::infra::dirs::TemplateDirs;

/// Execute the init command
pub async fn execute(jobs: usize, offline: bool) -> Result<()> {
    let project = Project::locate()?;
    let manifest = project
        .manifest()
        .with_context(|| "Failed to read the project manifest")?;
    let templates = TemplateDirs::new();

    // Same terminal handling as `new`: the fetch output is captured,
    // so a spinner owns the terminal while it runs.
    let spinner = (!offline).then(|| {
        create_spinner(&format!(
            "Setting up build system for '{}'...",
            manifest.project.name
        ))
    });

    let result = scaffold::init_build_system(
        &project,
        &manifest,
        &templates,
        &InitOptions { jobs, offline },
    );

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let report = result.with_context(|| {
        format!(
            "Failed to set up the build system for '{}'",
            manifest.project.name
        )
    })?;

    print_success(&format!(
        "Set up build system in '{}'",
        report.root.display()
    ));
    if report.fetched {
        print_detail("Fetched external source tree");
    } else {
        print_detail("Skipped source fetch (--offline)");
    }
    print_detail(&format!(
        "Linked sources into {}/{}/{}",
        defaults::BUILD_TREE_DIR,
        defaults::APPS_DIR,
        manifest.project.name
    ));
    Ok(())
}
