use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "chronicler")]
#[command(about = "Compare two columns of location IDs and keep a history of analysed files")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Where the recent-file history is stored
    #[arg(long, global = true)]
    pub history_path: Option<String>,

    /// Maximum number of files kept in history
    #[arg(long, global = true)]
    pub capacity: Option<usize>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a file, compute its distance and record it in history
    Analyze {
        file: String,

        /// Do not record this file in history
        #[arg(long)]
        no_history: bool,

        #[arg(long)]
        json: bool,
    },

    /// Check a file against the format rules without computing anything
    Validate {
        file: String,

        #[arg(long)]
        json: bool,
    },

    /// Extract both columns leniently, skipping values that are not numbers
    Parse {
        file: String,

        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit the recent-file history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum HistoryAction {
    /// List recorded files, most recent first
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show the cached results of a recorded file
    Show {
        name: String,

        #[arg(long)]
        json: bool,
    },

    /// Forget a recorded file
    Remove { name: String },

    /// Forget every recorded file
    Clear,
}

impl CliConfig {
    /// Resolve settings from the config file (if any) and the flags.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Settings::from_toml(&file)
            }
            None => Settings::default(),
        };

        if let Some(path) = &self.history_path {
            settings.history_path = path.clone();
        }
        if let Some(capacity) = self.capacity {
            settings.history_capacity = capacity;
        }
        if let Command::Analyze { no_history: true, .. } = self.command {
            settings.record_history = false;
        }
        settings.verbose |= self.verbose;
        settings.json_logs |= self.log_json;

        Ok(settings)
    }
}
