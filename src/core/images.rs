//! Build image classification and archival
//!
//! After a build pass the build system leaves its products in a
//! transient image directory. Files are classified by filename prefix:
//! application images start with `capdl-loader-experimental-image-`,
//! kernel images with `kernel-`. A valid build yields exactly one app
//! image and at most one kernel image (a configuration may boot a
//! prebuilt or external kernel, so zero kernels is valid).
//!
//! Archiving moves every file from the transient directory into a
//! per-configuration archive subtree, replacing same-named files from
//! earlier passes. Classification is a separate read used for later
//! retrieval, not a filter on what gets archived.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::error::ImageError;
use crate::infra::filesystem;

/// Classified build products of one configuration
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    /// The application boot image
    pub app: PathBuf,
    /// The kernel image, absent for configurations using an external kernel
    pub kernel: Option<PathBuf>,
}

/// Sorted file names of a directory
fn list_files(dir: &Path) -> Result<Vec<String>, ImageError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ImageError::ListDir {
        dir: dir.to_path_buf(),
        error: e.to_string(),
    })?;
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .collect();
    names.sort();
    Ok(names)
}

/// Classify the contents of an image directory into an [`ArtifactSet`].
///
/// Fails when zero or multiple app images match, or when multiple
/// kernel images match.
pub fn locate_artifacts(dir: &Path) -> Result<ArtifactSet, ImageError> {
    let names = list_files(dir)?;

    let apps: Vec<&String> = names
        .iter()
        .filter(|n| n.starts_with(defaults::APP_IMAGE_PREFIX))
        .collect();
    let kernels: Vec<&String> = names
        .iter()
        .filter(|n| n.starts_with(defaults::KERNEL_IMAGE_PREFIX))
        .collect();

    let app = match apps.as_slice() {
        [] => {
            return Err(ImageError::NoApp {
                dir: dir.to_path_buf(),
            })
        }
        [single] => dir.join(single),
        many => {
            return Err(ImageError::MultipleApps {
                dir: dir.to_path_buf(),
                count: many.len(),
            })
        }
    };

    let kernel = match kernels.as_slice() {
        [] => None,
        [single] => Some(dir.join(single)),
        many => {
            return Err(ImageError::MultipleKernels {
                dir: dir.to_path_buf(),
                count: many.len(),
            })
        }
    };

    Ok(ArtifactSet { app, kernel })
}

/// Move every file from `build_images_dir` into `archive_root/<name>`.
///
/// Same-named files already archived for `name` are replaced; unrelated
/// archived files are preserved. Returns the archive directory.
pub fn archive(
    name: &str,
    build_images_dir: &Path,
    archive_root: &Path,
) -> Result<PathBuf, ImageError> {
    let dest_dir = archive_root.join(name);
    filesystem::create_dir_all(&dest_dir)?;

    for file in list_files(build_images_dir)? {
        let dest = dest_dir.join(&file);
        filesystem::remove_file_if_exists(&dest)?;
        filesystem::move_file(&build_images_dir.join(&file), &dest)?;
    }

    Ok(dest_dir)
}
