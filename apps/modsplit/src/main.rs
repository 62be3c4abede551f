mod cli;

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

/// Exit status for fatal errors (missing source, bad configuration, I/O)
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
