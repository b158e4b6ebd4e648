use crate::config::toml_config::TomlConfig;
use crate::config::ClientSettings;
use crate::domain::model::EntityId;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vhs-rental")]
#[command(about = "Manage movies, customers, topics and loans of the VHS rental backend")]
pub struct CliConfig {
    /// Base URL of the rental backend, e.g. http://localhost:8000/api
    #[arg(long, env = "VHS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// TOML file with [backend] and [logging] sections
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Movies(ResourceCommand),
    #[command(subcommand)]
    Customers(ResourceCommand),
    #[command(subcommand)]
    Topics(ResourceCommand),
    #[command(subcommand)]
    Loans(ResourceCommand),
    /// Print the route table, or the view a path resolves to
    Routes { path: Option<String> },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ResourceCommand {
    List,
    Get {
        id: EntityId,
    },
    Create {
        /// Entity fields as a JSON object, without id
        #[arg(long)]
        json: String,
    },
    Update {
        id: EntityId,
        /// Entity fields as a JSON object, without id
        #[arg(long)]
        json: String,
    },
    Delete {
        id: EntityId,
    },
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// Defaults, then the config file, then flags and `VHS_API_URL`.
    pub fn settings(&self, file: Option<&TomlConfig>) -> ClientSettings {
        let settings = match file {
            Some(file) => ClientSettings::default().with_file(file),
            None => ClientSettings::default(),
        };
        settings.with_overrides(self.api_url.clone(), self.timeout_seconds)
    }
}
