//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress spinners
//! and formatted status messages to the user.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}

/// Print a top-level success message
pub fn print_success(message: &str) {
    println!("{} {message}", status::SUCCESS);
}

/// Print an indented detail line under a status message
pub fn print_detail(message: &str) {
    println!("  {message}");
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {message}", status::WARNING);
}

/// Print an error with its context chain as a single line
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}
