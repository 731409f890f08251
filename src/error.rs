//! Error types for camkit
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Project location and manifest errors
#[derive(Error, Debug)]
pub enum ProjectError {
    /// No ancestor directory contains the root marker
    #[error("No {marker} found in the current directory or any ancestor")]
    RootNotFound { marker: String },

    /// Current directory could not be determined
    #[error("Failed to determine current directory: {error}")]
    CurrentDir { error: String },

    /// Manifest could not be read
    #[error("Failed to read project manifest '{path}': {error}")]
    ManifestRead { path: PathBuf, error: String },

    /// Manifest could not be parsed
    #[error("Failed to parse project manifest: {source}")]
    ManifestParse {
        #[source]
        source: toml::de::Error,
    },
}

/// Template materialization errors
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Referenced template cannot be resolved
    #[error("Missing template \"{name}\"")]
    Missing { name: String },

    /// Rendering failed (propagated from the template engine, never retried)
    #[error("Failed to render template \"{name}\": {error}")]
    Render { name: String, error: String },

    /// Template tree could not be walked
    #[error("Failed to enumerate templates under '{path}': {error}")]
    Walk { path: PathBuf, error: String },

    /// Filesystem error while writing rendered output
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Saved build configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Named configuration does not exist
    #[error("No saved configuration named '{name}'")]
    NotFound { name: String },

    /// The build system's active configuration file does not exist
    #[error("No active build configuration at '{path}' (configure the build system first)")]
    NoActiveConfig { path: PathBuf },

    /// Filesystem error while copying or comparing configurations
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Build image classification and archival errors
#[derive(Error, Debug)]
pub enum ImageError {
    /// No application image was produced
    #[error("No app image found in '{dir}'")]
    NoApp { dir: PathBuf },

    /// More than one application image matched
    #[error("Multiple app images ({count}) found in '{dir}'")]
    MultipleApps { dir: PathBuf, count: usize },

    /// More than one kernel image matched
    #[error("Multiple kernel images ({count}) found in '{dir}'")]
    MultipleKernels { dir: PathBuf, count: usize },

    /// Image directory could not be listed
    #[error("Failed to list images in '{dir}': {error}")]
    ListDir { dir: PathBuf, error: String },

    /// Filesystem error while archiving
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Project scaffolding errors
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Target directory already exists
    #[error("Directory '{path}' already exists")]
    DirectoryExists { path: PathBuf },

    /// Template materialization failed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// External tool failure
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Filesystem error while creating the skeleton
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// External tool invocation errors
#[derive(Error, Debug)]
pub enum ToolError {
    /// Required external tool is not installed
    #[error("Required tool '{tool}' not found in PATH")]
    NotFound { tool: String },

    /// Tool could not be spawned
    #[error("Failed to run '{tool}': {error}")]
    Spawn { tool: String, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },

    /// Failed to copy file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to move file
    #[error("Failed to move '{from}' to '{to}': {error}")]
    MoveFile {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to create symbolic link
    #[error("Failed to create symlink '{link}': {error}")]
    Symlink { link: PathBuf, error: String },
}
