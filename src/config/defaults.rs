//! Default configuration values and well-known names

/// Root marker file identifying a camkit project directory
pub const MARKER_FILE: &str = "camkes.toml";

/// Directory of saved build configurations, relative to the project root
pub const CONFIGS_DIR: &str = "configs";

/// Directory of archived build images, relative to the project root
pub const IMAGES_DIR: &str = "images";

/// Project source directory
pub const SRC_DIR: &str = "src";

/// External seL4 build tree, relative to the project root
pub const BUILD_TREE_DIR: &str = "sel4";

/// Active build configuration file, relative to the build tree
pub const ACTIVE_CONFIG_FILE: &str = ".config";

/// Build image output directory, relative to the build tree
pub const BUILD_IMAGES_DIR: &str = "images";

/// App collection directory inside the build tree (symlink targets)
pub const APPS_DIR: &str = "apps";

/// Filename prefix of application boot images
pub const APP_IMAGE_PREFIX: &str = "capdl-loader-experimental-image-";

/// Filename prefix of kernel images
pub const KERNEL_IMAGE_PREFIX: &str = "kernel-";

/// Default source manifest repository for new projects
pub const DEFAULT_MANIFEST_URL: &str = "https://github.com/seL4/camkes-manifest.git";

/// Default manifest name within the manifest repository
pub const DEFAULT_MANIFEST_NAME: &str = "default.xml";

/// App descriptor template name inside base and app template trees
pub const APP_DESCRIPTOR_TEMPLATE: &str = "app.camkes";
