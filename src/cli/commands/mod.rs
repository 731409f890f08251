//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod clean;
pub mod config;
pub mod info;
pub mod init;
pub mod menuconfig;
pub mod new;
pub mod update;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::config::defaults;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project
    New {
        /// Project (and app) name
        name: String,

        /// Target directory (defaults to the project name)
        #[arg(short, long)]
        directory: Option<PathBuf>,

        /// App template to instantiate
        #[arg(short, long)]
        template: Option<String>,

        /// Source manifest repository URL
        #[arg(long, default_value = defaults::DEFAULT_MANIFEST_URL)]
        manifest_url: String,

        /// Manifest name within the repository
        #[arg(long, default_value = defaults::DEFAULT_MANIFEST_NAME)]
        manifest_name: String,

        /// Skip the source fetch step
        #[arg(long)]
        offline: bool,
    },

    /// Set up the build system in an existing project
    Init {
        /// Skip the source fetch step
        #[arg(long)]
        offline: bool,
    },

    /// Show template information
    Info {
        /// List available app templates
        #[arg(long)]
        list_templates: bool,
    },

    /// Manage saved build configurations
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Build a named configuration and archive its images
    Build {
        /// Name of the configuration to build
        config: String,
    },

    /// Re-synchronize the external source tree
    Update,

    /// Run the build system's interactive configuration
    Menuconfig,

    /// Remove build products via the build system
    Clean,
}

/// Saved configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Snapshot the active configuration under a name
    Save {
        /// Configuration name
        name: String,
    },

    /// Restore a saved configuration as the active one
    Load {
        /// Configuration name
        name: String,
    },

    /// List saved configurations
    List,

    /// Report whether the active configuration drifted from a saved one
    Status {
        /// Configuration name
        name: String,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, jobs: usize) -> Result<()> {
        match self {
            Self::New {
                name,
                directory,
                template,
                manifest_url,
                manifest_name,
                offline,
            } => {
                let options = new::NewOptions {
                    name,
                    directory,
                    template,
                    manifest_url,
                    manifest_name,
                    offline,
                };
                new::execute(options, jobs).await
            }
            Self::Init { offline } => init::execute(jobs, offline).await,
            Self::Info { list_templates } => info::execute(list_templates).await,
            Self::Config { command } => match command {
                ConfigCommands::Save { name } => config::execute_save(&name).await,
                ConfigCommands::Load { name } => config::execute_load(&name).await,
                ConfigCommands::List => config::execute_list().await,
                ConfigCommands::Status { name } => config::execute_status(&name).await,
            },
            Self::Build { config } => build::execute(&config, jobs).await,
            Self::Update => update::execute(jobs).await,
            Self::Menuconfig => menuconfig::execute().await,
            Self::Clean => clean::execute().await,
        }
    }
}
