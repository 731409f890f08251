//! External process invocation
//!
//! Runs the external build (`make`) and source-fetch (`repo`) tools.
//! Working directories are always passed explicitly to the child process;
//! the camkit process never changes its own working directory.
//!
//! Exit statuses of the external tools are logged but not interpreted:
//! the build system reports its own failures, and camkit's subsequent
//! steps (image classification) surface a broken build to the user.

use std::path::Path;
use std::process::Command;

use crate::error::ToolError;

/// Name of the external build tool
pub const BUILD_TOOL: &str = "make";

/// Name of the external source-fetch tool
pub const FETCH_TOOL: &str = "repo";

/// Verify an external tool is present in PATH before spawning it
pub fn require_tool(tool: &str) -> Result<(), ToolError> {
    which::which(tool)
        .map(|_| ())
        .map_err(|_| ToolError::NotFound {
            tool: tool.to_string(),
        })
}

/// Run a command to completion with inherited stdio, logging its exit status
fn run_logged(mut cmd: Command, tool: &str) -> Result<(), ToolError> {
    tracing::debug!("Running {:?}", cmd);
    let status = cmd.status().map_err(|e| ToolError::Spawn {
        tool: tool.to_string(),
        error: e.to_string(),
    })?;
    if !status.success() {
        tracing::warn!("'{tool}' exited with {status}");
    }
    Ok(())
}

/// Run a command with captured output, logging stderr on failure.
///
/// Used for the source-fetch tool so a spinner can own the terminal.
fn run_captured(mut cmd: Command, tool: &str) -> Result<(), ToolError> {
    tracing::debug!("Running {:?}", cmd);
    let output = cmd.output().map_err(|e| ToolError::Spawn {
        tool: tool.to_string(),
        error: e.to_string(),
    })?;
    if !output.status.success() {
        tracing::warn!(
            "'{tool}' exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}

/// Run the external build with the given parallelism
pub fn run_build(build_dir: &Path, jobs: usize) -> Result<(), ToolError> {
    require_tool(BUILD_TOOL)?;
    let mut cmd = Command::new(BUILD_TOOL);
    cmd.arg("-C").arg(build_dir).arg("--jobs").arg(jobs.to_string());
    run_logged(cmd, BUILD_TOOL)
}

/// Run the build system's interactive configuration
pub fn run_menuconfig(build_dir: &Path) -> Result<(), ToolError> {
    require_tool(BUILD_TOOL)?;
    let mut cmd = Command::new(BUILD_TOOL);
    cmd.arg("-C").arg(build_dir).arg("menuconfig");
    run_logged(cmd, BUILD_TOOL)
}

/// Remove build products via the build system's own clean target
pub fn run_clean(build_dir: &Path) -> Result<(), ToolError> {
    require_tool(BUILD_TOOL)?;
    let mut cmd = Command::new(BUILD_TOOL);
    cmd.arg("-C").arg(build_dir).arg("clean");
    run_logged(cmd, BUILD_TOOL)
}

/// Synchronize the external source tree into `dir` from a manifest
pub fn fetch_sources(
    dir: &Path,
    manifest_url: &str,
    manifest_name: &str,
    jobs: usize,
) -> Result<(), ToolError> {
    require_tool(FETCH_TOOL)?;

    let mut init = Command::new(FETCH_TOOL);
    init.current_dir(dir)
        .arg("init")
        .arg("-u")
        .arg(manifest_url)
        .arg("-m")
        .arg(manifest_name);
    run_captured(init, FETCH_TOOL)?;

    let mut sync = Command::new(FETCH_TOOL);
    sync.current_dir(dir)
        .arg("sync")
        .arg("--jobs")
        .arg(jobs.to_string());
    run_captured(sync, FETCH_TOOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_tool_missing() {
        let err = require_tool("definitely-not-a-real-tool-name").unwrap_err();
        assert!(matches!(err, ToolError::NotFound { .. }));
    }
}
