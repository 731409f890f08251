//! Template directory resolution
//!
//! Template trees are installed on disk under a single templates root.
//! The root can be overridden with the `CAMKIT_TEMPLATES_DIR` environment
//! variable; otherwise it defaults to the platform data directory
//! (XDG on Linux, Library on macOS).
//!
//! Layout under the root:
//!
//! - `base/` - top-level skeleton files for new projects
//! - `build/` - files rendered into the project root after source fetch
//! - `apps/<template>/` - named application templates

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the templates root
pub const ENV_TEMPLATES_DIR: &str = "CAMKIT_TEMPLATES_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "camkit";

/// Subdirectory names under the templates root
const TEMPLATES_SUBDIR: &str = "templates";
const BASE_SUBDIR: &str = "base";
const BUILD_SUBDIR: &str = "build";
const APPS_SUBDIR: &str = "apps";

/// Provider for the on-disk template trees
#[derive(Debug, Clone)]
pub struct TemplateDirs {
    root: PathBuf,
}

impl TemplateDirs {
    /// Resolve the templates root from the environment or platform default
    #[must_use]
    pub fn new() -> Self {
        let root = env::var(ENV_TEMPLATES_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::platform_root());
        Self { root }
    }

    /// Use an explicit templates root
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The templates root directory
    #[must_use]
    pub fn root(&self) -> PathBuf {
        self.root.clone()
    }

    /// Base skeleton template tree
    #[must_use]
    pub fn base_templates(&self) -> PathBuf {
        self.root.join(BASE_SUBDIR)
    }

    /// Build system template tree
    #[must_use]
    pub fn build_templates(&self) -> PathBuf {
        self.root.join(BUILD_SUBDIR)
    }

    /// Root of the named application template trees
    #[must_use]
    pub fn app_templates(&self) -> PathBuf {
        self.root.join(APPS_SUBDIR)
    }

    /// A single named application template tree
    #[must_use]
    pub fn app_template(&self, name: &str) -> PathBuf {
        self.app_templates().join(name)
    }

    /// Platform default: `<data dir>/camkit/templates`
    fn platform_root() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join(APP_NAME).join(TEMPLATES_SUBDIR))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".local").join("share").join(APP_NAME).join(TEMPLATES_SUBDIR))
                    .unwrap_or_else(|| {
                        PathBuf::from(".")
                            .join(".local")
                            .join("share")
                            .join(APP_NAME)
                            .join(TEMPLATES_SUBDIR)
                    })
            })
    }
}

impl Default for TemplateDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtrees_are_under_root() {
        let dirs = TemplateDirs::with_root("/opt/templates");
        assert!(dirs.base_templates().starts_with(dirs.root()));
        assert!(dirs.build_templates().starts_with(dirs.root()));
        assert!(dirs.app_templates().starts_with(dirs.root()));
    }

    #[test]
    fn test_app_template_is_under_apps() {
        let dirs = TemplateDirs::with_root("/opt/templates");
        assert!(dirs.app_template("hello").starts_with(dirs.app_templates()));
        assert!(dirs.app_template("hello").ends_with("hello"));
    }

    #[test]
    fn test_default_root_is_not_empty() {
        let dirs = TemplateDirs::new();
        assert!(!dirs.root().as_os_str().is_empty());
    }
}
