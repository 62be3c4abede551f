//! `modsplit split`

use super::report;
use anyhow::Result;
use clap::{Args, ValueEnum};
use modsplit_config::AppConfig;
use modsplit_services::{SplitOptions, Splitter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Exit status when the run finished but a file write failed or was skipped
const EXIT_INCOMPLETE: u8 = 1;

#[derive(Args)]
pub struct SplitArgs {
    /// Source file to split (overrides `source.path`)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Declarations go after the first line containing this text
    #[arg(long)]
    pub anchor: Option<String>,

    /// Directory for generated module files (defaults to the source's directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Report what would be written without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn run(args: SplitArgs, config: AppConfig) -> Result<ExitCode> {
    let mut options = SplitOptions::from_config(&config).with_dry_run(args.dry_run);
    if let Some(source) = args.source {
        options.source = source;
    }
    if let Some(anchor) = args.anchor {
        options = options.with_anchor(anchor);
    }
    if let Some(dir) = args.output_dir {
        options = options.with_output_dir(dir);
    }
    debug!(?options, "Resolved split options");

    let splitter = Splitter::new(options, config.imports);
    let split_report = splitter.run(&config.modules)?;

    match args.format {
        ReportFormat::Text => print!("{}", report::render_text(&split_report)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&split_report)?),
    }

    if split_report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INCOMPLETE))
    }
}
