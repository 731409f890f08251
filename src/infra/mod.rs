//! Infrastructure layer
//!
//! Handles side effects outside the core logic: filesystem mutation,
//! external process invocation, and template directory resolution.

pub mod dirs;
pub mod filesystem;
pub mod process;
