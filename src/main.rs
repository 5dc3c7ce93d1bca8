use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod cli;
mod command;
mod notify;
mod settings;
mod vault;

use cli::{Cli, Commands};
use notify::TerminalNotifier;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over the flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Push { file }) => {
            if !command::run_push(&file, cli.settings_dir, &TerminalNotifier).await? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Config { action }) => {
            command::run_config(action, cli.settings_dir).await?;
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!("Use 'filepush config set-url <URL>' to configure, then 'filepush push <FILE>'.");
        }
    }

    Ok(ExitCode::SUCCESS)
}
