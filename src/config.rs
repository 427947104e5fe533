use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::features::dictionary::DEFAULT_API_URL;

/// Dictionary lookup relay with prefix autocomplete.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Look up one word and print the result as JSON
    Define { word: String },
    /// Print autocomplete suggestions for a prefix
    Suggest { partial: String },
    /// Print the cleaned form and root of a word
    Root { word: String },
    /// Print word counts and average word length for a piece of text
    Stats { text: String },
}

#[derive(Debug, Clone, Args)]
pub struct Settings {
    #[arg(long, env = "HOST", default_value = "0.0.0.0", global = true)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000, global = true)]
    pub port: u16,

    #[arg(long, env = "DICTIONARY_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub dictionary_api_url: String,

    /// Newline separated vocabulary replacing the built-in suggestion list
    #[arg(long, env = "SUGGESTION_WORDS_FILE", global = true)]
    pub words_file: Option<PathBuf>,

    #[arg(long, env = "LOG_LEVEL", default_value = "info", value_parser = parse_level, global = true)]
    pub log_level: log::LevelFilter,

    /// log4rs YAML file; overrides --log-level when given
    #[arg(long, env = "LOG_CONFIG", global = true)]
    pub log_config: Option<PathBuf>,
}

fn parse_level(s: &str) -> Result<log::LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level `{}`", s))
}

impl Settings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Cli {
    /// Reads `.env` (if any) before parsing so its values act as defaults.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Cli::parse()
    }
}
