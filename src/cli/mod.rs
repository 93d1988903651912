//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::Result;

/// Reviewbot - Homework review status watcher.
#[derive(Parser, Debug)]
#[command(name = "reviewbot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the poll loop (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `reviewbot check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate settings file and credential presence
    Config(ConfigPathArg),
    /// Send a test message through the configured notifier
    Telegram(ConfigPathArg),
}

/// Shared argument for commands that only need a settings path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to settings file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to settings file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Override the poll interval, in seconds
    #[arg(long)]
    pub interval: Option<u64>,
}

/// Dispatch a parsed CLI invocation.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args.config),
        Commands::Check(CheckCommand::Telegram(args)) => {
            check::execute_telegram(&args.config).await
        }
    }
}
