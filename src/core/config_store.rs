//! Named build configuration snapshots
//!
//! The build system consumes a single active configuration file
//! (`sel4/.config`). The store keeps named byte-for-byte copies of it
//! under `configs/` so several configurations can be built against the
//! same tree. Names are exactly the directory listing of `configs/`.

use std::path::{Path, PathBuf};

use crate::core::project::{self, Project};
use crate::error::ConfigError;
use crate::infra::filesystem;

/// Store of named configurations for one project
#[derive(Debug, Clone)]
pub struct ConfigStore {
    configs_dir: PathBuf,
    active_config: PathBuf,
}

impl ConfigStore {
    /// Create a store over a project's configs directory and active config file
    #[must_use]
    pub fn for_project(project: &Project) -> Self {
        Self {
            configs_dir: project.configs_dir(),
            active_config: project.active_config_path(),
        }
    }

    /// Path of one saved configuration
    #[must_use]
    pub fn config_path(&self, name: &str) -> PathBuf {
        self.configs_dir.join(name)
    }

    /// Snapshot the active configuration file under `name`.
    ///
    /// Fails when the build system has no active configuration yet.
    pub fn save(&self, name: &str) -> Result<(), ConfigError> {
        if !self.active_config.exists() {
            return Err(ConfigError::NoActiveConfig {
                path: self.active_config.clone(),
            });
        }
        filesystem::create_dir_all(&self.configs_dir)?;
        filesystem::copy_file(&self.active_config, &self.config_path(name))?;
        Ok(())
    }

    /// Restore the saved configuration `name` as the active configuration
    pub fn load(&self, name: &str) -> Result<(), ConfigError> {
        let saved = self.config_path(name);
        if !saved.exists() {
            return Err(ConfigError::NotFound {
                name: name.to_string(),
            });
        }
        filesystem::copy_file(&saved, &self.active_config)?;
        Ok(())
    }

    /// Sorted names of all saved configurations.
    ///
    /// An absent configs directory is an empty store, not an error.
    pub fn list(&self) -> Result<Vec<String>, ConfigError> {
        let entries = match std::fs::read_dir(&self.configs_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ConfigError::Filesystem(
                    crate::error::FilesystemError::ReadFile {
                        path: self.configs_dir.clone(),
                        error: e.to_string(),
                    },
                ))
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().to_str().map(String::from))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Whether the active configuration has drifted from the saved `name`.
    ///
    /// Reports `false` when no active configuration file exists yet.
    pub fn changed(&self, name: &str) -> Result<bool, ConfigError> {
        if !self.active_config.exists() {
            return Ok(false);
        }
        let saved = self.config_path(name);
        if !saved.exists() {
            return Err(ConfigError::NotFound {
                name: name.to_string(),
            });
        }
        let active = filesystem::read_bytes(&self.active_config)?;
        let snapshot = filesystem::read_bytes(&saved)?;
        Ok(active != snapshot)
    }
}

/// List saved configurations from anywhere in a directory tree.
///
/// Tolerant of being invoked outside a project: when no root marker is
/// found the result is the empty list, never an error.
pub fn list_from(start: &Path) -> Result<Vec<String>, ConfigError> {
    match project::find_root_from(start) {
        Ok(root) => ConfigStore::for_project(&Project::at(root)).list(),
        Err(_) => Ok(Vec::new()),
    }
}
