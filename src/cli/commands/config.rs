//! CLI implementation for `camkit config`
//!
//! Save, restore, list and compare named build configurations.

use anyhow::{Context, Result};

use crate::cli::output::{print_success, print_warning};
use crate::core::config_store::{self, ConfigStore};
use crate::core::project::Project;

/// Snapshot the active configuration under `name`
pub async fn execute_save(name: &str) -> Result<()> {
    let project = Project::locate()?;
    let store = ConfigStore::for_project(&project);
    store
        .save(name)
        .with_context(|| format!("Failed to save configuration '{name}'"))?;
    print_success(&format!("Saved configuration '{name}'"));
    Ok(())
}

/// Restore a saved configuration as the active one
pub async fn execute_load(name: &str) -> Result<()> {
    let project = Project::locate()?;
    let store = ConfigStore::for_project(&project);
    store
        .load(name)
        .with_context(|| format!("Failed to load configuration '{name}'"))?;
    print_success(&format!("Loaded configuration '{name}'"));
    Ok(())
}

/// List saved configurations.
///
/// Valid anywhere: outside a project the list is simply empty.
pub async fn execute_list() -> Result<()> {
    let cwd = std::env::current_dir()?;
    for name in config_store::list_from(&cwd)? {
        println!("{name}");
    }
    Ok(())
}

/// Report drift between the active configuration and a saved one
pub async fn execute_status(name: &str) -> Result<()> {
    let project = Project::locate()?;
    let store = ConfigStore::for_project(&project);
    if store.changed(name)? {
        print_warning(&format!(
            "Active configuration differs from saved '{name}' (run 'camkit config save {name}' to update it)"
        ));
    } else {
        print_success(&format!("Active configuration matches saved '{name}'"));
    }
    Ok(())
}
