//! `modsplit init`

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use modsplit_config::AppConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(long, default_value = "modsplit.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<ExitCode> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    AppConfig::default().save(&args.path)?;
    println!("{} Wrote {}", "✓".green(), args.path.display());
    Ok(ExitCode::SUCCESS)
}
