//! Project root location and path layout
//!
//! A directory is a project root when it directly contains the marker
//! file `camkes.toml`. The root is discovered by walking upward from a
//! starting directory; everything else in the project is addressed
//! relative to it.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::manifest::ProjectManifest;
use crate::error::ProjectError;
use crate::infra::filesystem;

/// Find the closest ancestor of `start` (inclusive) containing the root marker.
///
/// Read-only: never creates the marker or any directory.
pub fn find_root_from(start: &Path) -> Result<PathBuf, ProjectError> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(defaults::MARKER_FILE).exists() {
            return Ok(current);
        }
        // pop() fails once the filesystem root is reached
        if !current.pop() {
            break;
        }
    }
    Err(ProjectError::RootNotFound {
        marker: defaults::MARKER_FILE.to_string(),
    })
}

/// Find the project root starting at the current working directory
pub fn find_root() -> Result<PathBuf, ProjectError> {
    let cwd = std::env::current_dir().map_err(|e| ProjectError::CurrentDir {
        error: e.to_string(),
    })?;
    find_root_from(&cwd)
}

/// A located project and its well-known paths
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Locate the project containing the current working directory
    pub fn locate() -> Result<Self, ProjectError> {
        find_root().map(|root| Self { root })
    }

    /// Locate the project containing `start`
    pub fn locate_from(start: &Path) -> Result<Self, ProjectError> {
        find_root_from(start).map(|root| Self { root })
    }

    /// Wrap a known project root without searching
    #[must_use]
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the root marker / manifest file
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(defaults::MARKER_FILE)
    }

    /// Directory of saved build configurations
    #[must_use]
    pub fn configs_dir(&self) -> PathBuf {
        self.root.join(defaults::CONFIGS_DIR)
    }

    /// Root of the per-configuration image archive
    #[must_use]
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(defaults::IMAGES_DIR)
    }

    /// Archive directory for one configuration name
    #[must_use]
    pub fn image_dir(&self, config: &str) -> PathBuf {
        self.images_dir().join(config)
    }

    /// Project source directory
    #[must_use]
    pub fn src_dir(&self) -> PathBuf {
        self.root.join(defaults::SRC_DIR)
    }

    /// External seL4 build tree
    #[must_use]
    pub fn build_tree(&self) -> PathBuf {
        self.root.join(defaults::BUILD_TREE_DIR)
    }

    /// The build system's single active configuration file
    #[must_use]
    pub fn active_config_path(&self) -> PathBuf {
        self.build_tree().join(defaults::ACTIVE_CONFIG_FILE)
    }

    /// The build system's transient image output directory
    #[must_use]
    pub fn build_images_dir(&self) -> PathBuf {
        self.build_tree().join(defaults::BUILD_IMAGES_DIR)
    }

    /// The build tree's app collection directory
    #[must_use]
    pub fn apps_dir(&self) -> PathBuf {
        self.build_tree().join(defaults::APPS_DIR)
    }

    /// Parse the project manifest
    pub fn manifest(&self) -> Result<ProjectManifest, ProjectError> {
        let path = self.manifest_path();
        let content = filesystem::read_file(&path).map_err(|e| ProjectError::ManifestRead {
            path: path.clone(),
            error: e.to_string(),
        })?;
        ProjectManifest::from_toml(&content)
            .map_err(|source| ProjectError::ManifestParse { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_root_from_marker_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(defaults::MARKER_FILE), "").unwrap();
        let root = find_root_from(dir.path()).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_find_root_from_nested_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(defaults::MARKER_FILE), "").unwrap();
        let nested = dir.path().join("src/deep/inside");
        std::fs::create_dir_all(&nested).unwrap();
        let root = find_root_from(&nested).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_find_root_fails_without_marker() {
        let dir = TempDir::new().unwrap();
        let err = find_root_from(dir.path()).unwrap_err();
        assert!(matches!(err, ProjectError::RootNotFound { .. }));
    }

    #[test]
    fn test_project_paths_are_under_root() {
        let project = Project::at("/work/demo");
        assert!(project.configs_dir().starts_with(project.root()));
        assert!(project.active_config_path().starts_with(project.build_tree()));
        assert!(project.build_images_dir().starts_with(project.build_tree()));
        assert!(project.image_dir("ia32").starts_with(project.images_dir()));
    }
}
