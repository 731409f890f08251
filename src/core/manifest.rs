//! Project manifest (camkes.toml) handling
//!
//! The manifest is the root marker file of a project. It records the
//! project name and the source manifest used to fetch the external
//! build tree, and supplies the context for template rendering.

use serde::Deserialize;

/// Parsed contents of camkes.toml
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectManifest {
    /// Project metadata
    pub project: ProjectSection,
    /// External source manifest settings
    pub source: SourceSection,
}

/// `[project]` section
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Project name (also the app and symlink name)
    pub name: String,
}

/// `[source]` section
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSection {
    /// URL of the source manifest repository
    pub manifest_url: String,
    /// Manifest name within the repository
    pub manifest_name: String,
}

impl ProjectManifest {
    /// Build a manifest from its parts
    #[must_use]
    pub fn new(name: &str, manifest_url: &str, manifest_name: &str) -> Self {
        Self {
            project: ProjectSection {
                name: name.to_string(),
            },
            source: SourceSection {
                manifest_url: manifest_url.to_string(),
                manifest_name: manifest_name.to_string(),
            },
        }
    }

    /// Parse a manifest from TOML
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Context mapping handed to the template renderer
    #[must_use]
    pub fn render_context(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.project.name,
            "manifest_url": self.source.manifest_url,
            "manifest_name": self.source.manifest_name,
        })
    }
}

/// Generate the initial manifest content for a new project
#[must_use]
pub fn generate_manifest_content(name: &str, manifest_url: &str, manifest_name: &str) -> String {
    format!(
        r#"# CamkES project manifest
# The presence of this file marks the project root.

[project]
name = "{name}"

[source]
manifest_url = "{manifest_url}"
manifest_name = "{manifest_name}"
"#
    )
}
