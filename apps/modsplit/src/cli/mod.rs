//! CLI command handling for modsplit

mod init;
mod plan;
mod report;
mod split;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use modsplit_config::{logging, AppConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// The main CLI struct.
#[derive(Parser)]
#[command(name = "modsplit")]
#[command(about = "Split a monolithic Rust source file into thematic modules")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to modsplit.toml or .modsplit/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Extract the planned definitions into module files and rewrite the source
    Split(split::SplitArgs),

    /// Show the effective module plan and import table
    Plan(plan::PlanArgs),

    /// Write a configuration file holding the built-in plan
    Init(init::InitArgs),
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Split(args) => {
            let config = load_config(cli.config.as_deref(), cli.log_level)?;
            split::run(args, config)
        }
        Command::Plan(args) => {
            let config = load_config(cli.config.as_deref(), cli.log_level)?;
            plan::run(args, &config)
        }
        Command::Init(args) => init::run(args),
    }
}

/// Load configuration, apply the log level override and start logging
fn load_config(path: Option<&Path>, log_level: Option<String>) -> Result<AppConfig> {
    let mut config = AppConfig::load_from(path).context("Failed to load configuration")?;

    if let Some(level) = log_level {
        config.logging.level = level;
        config.validate()?;
    }

    logging::initialize(&config.logging);
    Ok(config)
}
