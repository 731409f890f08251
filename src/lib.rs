//! Camkit - project manager for CamkES/seL4 applications
//!
//! This library provides the core functionality for scaffolding CamkES
//! application projects, tracking named build configurations, driving the
//! external seL4 build, and archiving the produced boot images.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (project location, configs, images, templates)
//! - [`infra`] - Infrastructure layer (filesystem, external processes)
//! - [`config`] - Constants and well-known names
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
