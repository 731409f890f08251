//! CLI implementation for `camkit menuconfig`

use anyhow::Result;

use crate::cli::output::print_detail;
use crate::core::project::Project;
use crate::infra::process;

/// Execute the menuconfig command
pub async fn execute() -> Result<()> {
    let project = Project::locate()?;
    process::run_menuconfig(&project.build_tree())?;
    print_detail("Run 'camkit config save <name>' to keep the new configuration");
    Ok(())
}
