//! Template tree materialization
//!
//! Renders a directory tree of templates into a destination tree with
//! the relative paths preserved. Hidden entries (leading dot) are
//! skipped entirely, including everything below a hidden directory.
//! Enumeration is in lexicographic file-name order so repeated runs are
//! deterministic; files are independent and callers must not rely on
//! the order.
//!
//! Rendering is delegated to handlebars with strict mode enabled: a
//! `{{variable}}` missing from the context fails the render instead of
//! silently producing an empty string. Render faults are not retried.

use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde_json::Value;
use walkdir::{DirEntry, WalkDir};

use crate::error::TemplateError;
use crate::infra::filesystem;

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

/// Renders template trees into destination trees
pub struct Materializer {
    registry: Handlebars<'static>,
}

impl Materializer {
    /// Create a materializer with strict-mode rendering
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        Self { registry }
    }

    /// Render every non-hidden file under `template_root` into
    /// `dest_root`, preserving relative paths. Existing destination
    /// files are overwritten. Returns the number of files rendered.
    pub fn materialize(
        &self,
        template_root: &Path,
        dest_root: &Path,
        ctx: &Value,
    ) -> Result<usize, TemplateError> {
        let walker = WalkDir::new(template_root)
            .sort_by_file_name()
            .into_iter()
            // depth 0 is the root itself, which may carry any name
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        let mut rendered = 0;
        for entry in walker {
            let entry = entry.map_err(|e| TemplateError::Walk {
                path: template_root.to_path_buf(),
                error: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(template_root)
                .map_err(|e| TemplateError::Walk {
                    path: template_root.to_path_buf(),
                    error: e.to_string(),
                })?
                .to_path_buf();
            let name = rel.to_string_lossy().into_owned();
            self.render_to(entry.path(), &name, &dest_root.join(&rel), ctx)?;
            rendered += 1;
        }
        Ok(rendered)
    }

    /// Render an explicit mapping of template name to destination path.
    ///
    /// Used for the fixed set of top-level skeleton files, where the
    /// destinations do not mirror the template tree layout.
    pub fn materialize_fixed(
        &self,
        template_root: &Path,
        mapping: &[(&str, PathBuf)],
        ctx: &Value,
    ) -> Result<(), TemplateError> {
        for (name, dest) in mapping {
            self.render_to(&template_root.join(name), name, dest, ctx)?;
        }
        Ok(())
    }

    /// Render one template file to one destination path
    fn render_to(
        &self,
        source: &Path,
        name: &str,
        dest: &Path,
        ctx: &Value,
    ) -> Result<(), TemplateError> {
        if !source.is_file() {
            return Err(TemplateError::Missing {
                name: name.to_string(),
            });
        }
        let template = filesystem::read_file(source)?;
        let output = self
            .registry
            .render_template(&template, ctx)
            .map_err(|e| TemplateError::Render {
                name: name.to_string(),
                error: e.to_string(),
            })?;

        filesystem::remove_file_if_exists(dest)?;
        filesystem::write_file(dest, &output)?;
        Ok(())
    }
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_substitutes_context() {
        let templates = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        std::fs::write(templates.path().join("greeting"), "hello {{name}}").unwrap();

        let m = Materializer::new();
        let count = m
            .materialize(templates.path(), dest.path(), &json!({"name": "pinger"}))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(
            std::fs::read_to_string(dest.path().join("greeting")).unwrap(),
            "hello pinger"
        );
    }

    #[test]
    fn test_strict_mode_rejects_unknown_variable() {
        let templates = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        std::fs::write(templates.path().join("bad"), "{{no_such_var}}").unwrap();

        let m = Materializer::new();
        let err = m
            .materialize(templates.path(), dest.path(), &json!({"name": "x"}))
            .unwrap_err();
        assert!(matches!(err, TemplateError::Render { .. }));
    }

    #[test]
    fn test_fixed_mapping_missing_template() {
        let templates = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let m = Materializer::new();
        let err = m
            .materialize_fixed(
                templates.path(),
                &[("gitignore", dest.path().join(".gitignore"))],
                &json!({}),
            )
            .unwrap_err();
        assert!(matches!(err, TemplateError::Missing { name } if name == "gitignore"));
    }
}
