//! `modsplit plan`

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use modsplit_config::AppConfig;
use std::process::ExitCode;

#[derive(Args)]
pub struct PlanArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = PlanFormat::Summary)]
    pub format: PlanFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// One line per module
    Summary,
    /// The full effective configuration as TOML
    Toml,
    /// The full effective configuration as JSON
    Json,
}

pub fn run(args: PlanArgs, config: &AppConfig) -> Result<ExitCode> {
    match args.format {
        PlanFormat::Toml => print!("{}", config.to_toml()?),
        PlanFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        PlanFormat::Summary => {
            println!(
                "{} {} (anchor: {:?})",
                "source".bold(),
                config.source.path.display(),
                config.source.anchor
            );
            for module in &config.modules {
                println!(
                    "  {:<12} {} functions, {} structs, {} extra imports",
                    module.name.cyan(),
                    module.functions.len(),
                    module.structs.len(),
                    module.imports.len()
                );
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
