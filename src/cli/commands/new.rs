//! CLI implementation for `camkit new`
//!
//! This module handles the CLI interface for project scaffolding.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::output::{create_spinner, print_detail, print_success};
use crate::config::defaults;
use crate::core::scaffold::{self, ScaffoldOptions};
use crate::infra::dirs::TemplateDirs;

/// Arguments collected from the `new` subcommand
#[derive(Debug)]
pub struct NewOptions {
    pub name: String,
    pub directory: Option<PathBuf>,
    pub template: Option<String>,
    pub manifest_url: String,
    pub manifest_name: String,
    pub offline: bool,
}

/// Execute the new command
pub async fn execute(options: NewOptions, jobs: usize) -> Result<()> {
    let directory = options
        .directory
        .unwrap_or_else(|| PathBuf::from(&options.name));

    let scaffold_options = ScaffoldOptions {
        name: options.name.clone(),
        directory,
        template: options.template,
        manifest_url: options.manifest_url,
        manifest_name: options.manifest_name,
        jobs,
        offline: options.offline,
    };
    let templates = TemplateDirs::new();

    // The fetch step dominates the run time and its output is captured,
    // so a spinner owns the terminal for the whole scaffold.
    let spinner = (!scaffold_options.offline)
        .then(|| create_spinner(&format!("Setting up project '{}'...", options.name)));

    let result = scaffold::scaffold(&scaffold_options, &templates);

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let report = result.with_context(|| format!("Failed to set up project '{}'", options.name))?;

    print_success(&format!(
        "Set up new project '{}' in directory '{}'",
        options.name,
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
        options.name
    ));
    Ok(())
}
