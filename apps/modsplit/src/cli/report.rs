//! Human-readable rendering of a split report

use colored::Colorize;
use modsplit_foundation::{FileRole, ItemStatus, SplitReport, WriteStatus};
use std::fmt::Write as _;

/// Render `report` as the text shown after `modsplit split`
pub fn render_text(report: &SplitReport) -> String {
    let mut out = String::new();

    if report.dry_run {
        let _ = writeln!(out, "{}", "Dry run: no files were changed".yellow().bold());
    }

    for module in &report.modules {
        let _ = writeln!(
            out,
            "{} {} ({}/{} found, {} fragments)",
            "module".bold(),
            module.name.cyan(),
            module.found(),
            module.requested(),
            module.fragments
        );
        for item in &module.outcomes {
            let line = match &item.status {
                ItemStatus::Extracted { blocks } if *blocks > 1 => {
                    format!("{} {} {} ({} blocks)", "✓".green(), item.kind, item.name, blocks)
                }
                ItemStatus::Extracted { .. } => {
                    format!("{} {} {}", "✓".green(), item.kind, item.name)
                }
                ItemStatus::NotFound => {
                    format!("{} {} {} not found", "⚠".yellow(), item.kind, item.name)
                }
                ItemStatus::Truncated => {
                    format!("{} {} {} truncated", "⚠".yellow(), item.kind, item.name)
                }
            };
            let _ = writeln!(out, "  {}", line);
        }
    }

    let _ = writeln!(out);
    for file in &report.files {
        let role = match file.role {
            FileRole::Backup => "backup",
            FileRole::Module => "module",
            FileRole::Source => "source",
        };
        let line = match &file.status {
            WriteStatus::Written => format!("{} {} {}", "✓".green(), role, file.path.display()),
            WriteStatus::Planned => {
                format!("{} {} {} (planned)", "•".blue(), role, file.path.display())
            }
            WriteStatus::Failed { error } => format!(
                "{} {} {} failed: {}",
                "✗".red(),
                role,
                file.path.display(),
                error
            ),
            WriteStatus::Skipped { reason } => format!(
                "{} {} {} skipped: {}",
                "⚠".yellow(),
                role,
                file.path.display(),
                reason
            ),
        };
        let _ = writeln!(out, "{}", line);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} of {} definitions extracted",
        report.total_found(),
        report.total_requested()
    );

    if report.is_success() {
        let _ = writeln!(out, "{}", "🎯 Split complete!".green().bold());
        if !report.dry_run {
            let _ = writeln!(out, "🔧 Verify with: cargo check");
            if let Some(backup) = &report.backup {
                let _ = writeln!(out, "📁 Original saved as {}", backup.display());
            }
        }
    } else {
        let _ = writeln!(out, "{}", "Split finished with errors".red().bold());
    }

    out
}
