//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};
use crate::model::RecordKind;

/// Terminal console for the vehicle register API
#[derive(Parser, Debug)]
#[command(name = "vehicle-console")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL from the config file
    #[arg(long, env = "VEHICLE_CONSOLE_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Runs the interactive console when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Forget the stored login token
    Logout,
    /// Print one collection using the stored token
    List {
        /// segments, brands or vehicles
        kind: RecordKind,
    },
}

impl Cli {
    /// Config from `--config` (or the default path) with `--api-url` applied.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        match &self.api_url {
            Some(url) => config.with_base_url(url.clone()),
            None => Ok(config),
        }
    }
}
