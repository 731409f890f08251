//! New project scaffolding and build system setup
//!
//! A scaffold run is a straight-line state machine, terminal on the
//! first failure with no rollback: skeleton directories, project
//! manifest, base templates, source fetch, build templates, optional
//! app template, and finally the symlink that makes the external build
//! tree aware of the project sources. The fetch, build-template, and
//! symlink tail of that sequence is also available on its own for
//! existing projects.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::manifest::{self, ProjectManifest};
use crate::core::project::Project;
use crate::core::templates::Materializer;
use crate::error::{ScaffoldError, TemplateError};
use crate::infra::dirs::TemplateDirs;
use crate::infra::{filesystem, process};

/// Relative path from the build tree's apps directory to the project
/// src directory (the skeleton layout is fixed)
const APP_LINK_TARGET: &str = "../../src";

/// Options for one scaffold run
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Project (and app) name
    pub name: String,
    /// Target directory; must not exist yet
    pub directory: PathBuf,
    /// Named app template to render instead of the default descriptor
    pub template: Option<String>,
    /// Source manifest repository URL
    pub manifest_url: String,
    /// Manifest name within the repository
    pub manifest_name: String,
    /// Parallelism handed to the source-fetch tool
    pub jobs: usize,
    /// Skip the source fetch step
    pub offline: bool,
}

/// Result of a successful scaffold run
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Root of the created project
    pub root: PathBuf,
    /// Whether the external source tree was fetched
    pub fetched: bool,
}

/// Create a new project at `options.directory`.
///
/// The existence check runs before any filesystem mutation; a failed
/// run after that point leaves whatever was written.
pub fn scaffold(
    options: &ScaffoldOptions,
    templates: &TemplateDirs,
) -> Result<ScaffoldReport, ScaffoldError> {
    if options.directory.exists() {
        return Err(ScaffoldError::DirectoryExists {
            path: options.directory.clone(),
        });
    }

    tracing::info!("Creating directories");
    make_skeleton(&options.directory)?;

    let manifest =
        ProjectManifest::new(&options.name, &options.manifest_url, &options.manifest_name);
    let content = manifest::generate_manifest_content(
        &options.name,
        &options.manifest_url,
        &options.manifest_name,
    );
    filesystem::write_file(&options.directory.join(defaults::MARKER_FILE), &content)?;

    let ctx = manifest.render_context();
    let materializer = Materializer::new();

    tracing::info!("Instantiating base templates");
    materializer.materialize_fixed(&templates.base_templates(), &base_mapping(options), &ctx)?;

    let build_tree = options.directory.join(defaults::BUILD_TREE_DIR);
    let fetched = if options.offline {
        tracing::info!("Offline scaffold, skipping source fetch");
        false
    } else {
        tracing::info!("Downloading dependencies");
        process::fetch_sources(
            &build_tree,
            &options.manifest_url,
            &options.manifest_name,
            options.jobs,
        )?;
        true
    };

    tracing::info!("Instantiating build templates");
    materializer.materialize(&templates.build_templates(), &options.directory, &ctx)?;

    if let Some(template) = &options.template {
        tracing::info!("Instantiating app template '{template}'");
        render_app_template(&materializer, templates, template, options, &ctx)?;
    }

    tracing::info!("Creating build system symlinks");
    link_app_sources(&options.directory, &options.name)?;

    Ok(ScaffoldReport {
        root: options.directory.clone(),
        fetched,
    })
}

/// Options for setting up the build system in an existing project
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Parallelism handed to the source-fetch tool
    pub jobs: usize,
    /// Skip the source fetch step
    pub offline: bool,
}

/// Set up the external build system of an existing project: fetch the
/// source tree, render the build templates into the project root, and
/// link the app sources into the build tree.
///
/// The manifest drives the fetch and the render context, so this works
/// on projects whose build tree was deleted or never fetched.
pub fn init_build_system(
    project: &Project,
    manifest: &ProjectManifest,
    templates: &TemplateDirs,
    options: &InitOptions,
) -> Result<ScaffoldReport, ScaffoldError> {
    filesystem::create_dir_all(&project.build_tree())?;

    let fetched = if options.offline {
        tracing::info!("Offline init, skipping source fetch");
        false
    } else {
        tracing::info!("Downloading dependencies");
        process::fetch_sources(
            &project.build_tree(),
            &manifest.source.manifest_url,
            &manifest.source.manifest_name,
            options.jobs,
        )?;
        true
    };

    tracing::info!("Instantiating build templates");
    let ctx = manifest.render_context();
    Materializer::new().materialize(&templates.build_templates(), project.root(), &ctx)?;

    tracing::info!("Creating build system symlinks");
    link_app_sources(project.root(), &manifest.project.name)?;

    Ok(ScaffoldReport {
        root: project.root().to_path_buf(),
        fetched,
    })
}

/// Create the project directory with its src and build tree subdirectories
fn make_skeleton(directory: &Path) -> Result<(), ScaffoldError> {
    filesystem::create_dir_all(directory)?;
    filesystem::create_dir_all(&directory.join(defaults::SRC_DIR))?;
    filesystem::create_dir_all(&directory.join(defaults::BUILD_TREE_DIR))?;
    Ok(())
}

/// Fixed mapping of base skeleton templates to their destinations.
///
/// The default app descriptor is only rendered when no named app
/// template was requested, since the app template provides its own.
fn base_mapping(options: &ScaffoldOptions) -> Vec<(&'static str, PathBuf)> {
    let src = options.directory.join(defaults::SRC_DIR);
    let mut mapping = vec![
        ("gitignore", options.directory.join(".gitignore")),
        ("Makefile", src.join("Makefile")),
        ("Kbuild", src.join("Kbuild")),
        ("Kconfig", src.join("Kconfig")),
    ];
    if options.template.is_none() {
        mapping.push((
            defaults::APP_DESCRIPTOR_TEMPLATE,
            src.join(format!("{}.camkes", options.name)),
        ));
    }
    mapping
}

/// Render a named app template: its descriptor becomes
/// `src/<name>.camkes` and its src subtree is mirrored into the
/// project's src directory.
fn render_app_template(
    materializer: &Materializer,
    templates: &TemplateDirs,
    template_name: &str,
    options: &ScaffoldOptions,
    ctx: &serde_json::Value,
) -> Result<(), ScaffoldError> {
    let root = templates.app_template(template_name);
    if !root.is_dir() {
        return Err(TemplateError::Missing {
            name: template_name.to_string(),
        }
        .into());
    }

    let src_dest = options.directory.join(defaults::SRC_DIR);
    materializer.materialize_fixed(
        &root,
        &[(
            defaults::APP_DESCRIPTOR_TEMPLATE,
            src_dest.join(format!("{}.camkes", options.name)),
        )],
        ctx,
    )?;

    let src_tree = root.join(defaults::SRC_DIR);
    if src_tree.is_dir() {
        materializer.materialize(&src_tree, &src_dest, ctx)?;
    }
    Ok(())
}

/// Symlink the project sources into the build tree's app collection
fn link_app_sources(directory: &Path, name: &str) -> Result<(), ScaffoldError> {
    let apps_dir = directory
        .join(defaults::BUILD_TREE_DIR)
        .join(defaults::APPS_DIR);
    filesystem::create_dir_all(&apps_dir)?;

    let link = apps_dir.join(name);
    filesystem::remove_file_if_exists(&link)?;
    filesystem::symlink(Path::new(APP_LINK_TARGET), &link)?;
    Ok(())
}

/// Sorted names of the installed app templates
#[must_use]
pub fn list_app_templates(templates: &TemplateDirs) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(templates.app_templates()) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .collect();
    names.sort();
    names
}
