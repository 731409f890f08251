//! CLI implementation for `camkit clean`

use anyhow::Result;

use crate::cli::output::print_success;
use crate::core::project::Project;
use crate::infra::process;

/// Execute the clean command
pub async fn execute() -> Result<()> {
    let project = Project::locate()?;
    process::run_clean(&project.build_tree())?;
    print_success("Cleaned build products");
    Ok(())
}
