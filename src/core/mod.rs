//! Core business logic module
//!
//! # Submodules
//!
//! - [`project`] - Project root location and path layout
//! - [`manifest`] - Project manifest (camkes.toml) handling
//! - [`config_store`] - Named build configuration snapshots
//! - [`images`] - Build image classification and archival
//! - [`templates`] - Template tree materialization
//! - [`scaffold`] - New project scaffolding

pub mod config_store;
pub mod images;
pub mod manifest;
pub mod project;
pub mod scaffold;
pub mod templates;
