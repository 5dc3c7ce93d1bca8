use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// filepush - push a file to your blog's publishing endpoint
#[derive(Parser)]
#[command(name = "filepush")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding settings.json. Defaults to <config dir>/filepush
    #[arg(long, global = true)]
    pub settings_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sync a file to the configured publisher URL
    Push {
        /// File to send
        file: PathBuf,
    },
    /// Show or edit the publisher settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current settings
    Show,
    /// Set the POST url the file is sent to as a multipart/form-data body
    SetUrl {
        /// Publisher URL
        url: String,
    },
    /// Set the API key sent as the bearer token when posting a file
    SetApiKey {
        /// API key
        api_key: String,
    },
}
