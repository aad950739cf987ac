use std::{
    io::{self, Write},
    path::Path,
    time::Duration,
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use uimigrate_core::MigrateError;

use crate::{rewrite::RADIX_UI_PACKAGE, types::MigrationReport};

/// Receives progress from a migration run. Purely observational.
pub trait Reporter: Send + Sync {
    fn on_stage(&self, label: &str);
    fn on_file_done(&self, path: &Path);
    fn on_success(&self, message: &str);
    fn on_failure(&self, error: &MigrateError);
}

/// Reports progress on a terminal spinner.
pub struct SpinnerReporter {
    pb: ProgressBar,
}

impl SpinnerReporter {
    pub fn new(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }
}

impl Reporter for SpinnerReporter {
    fn on_stage(&self, label: &str) {
        self.pb.set_message(label.to_string());
    }

    fn on_file_done(&self, path: &Path) {
        self.pb.set_message(format!("Updated imports in {}", path.display()));
    }

    fn on_success(&self, message: &str) {
        self.pb.finish_with_message(format!("{} {}", "✔".green(), message));
    }

    fn on_failure(&self, error: &MigrateError) {
        self.pb.abandon_with_message(format!("{} {}", "✖".red(), error));
    }
}

pub fn print_summary<W: Write>(
    writer: &mut W,
    report: &MigrationReport,
    elapsed_ms: u128,
) -> io::Result<()> {
    debug!("Printing summary for {} files", report.files_scanned);

    writeln!(
        writer,
        "{} Migrated {} of {} files to {}.",
        "✓".green().bold(),
        report.files_changed.to_string().cyan(),
        report.files_scanned.to_string().cyan(),
        RADIX_UI_PACKAGE.bold()
    )?;

    if report.removed_packages.is_empty() {
        writeln!(writer, "  No unused radix packages to remove.")?;
    } else {
        writeln!(
            writer,
            "  Removed {} packages with {}:",
            report.removed_packages.len().to_string().yellow(),
            report.package_manager.to_string().bold()
        )?;
        for (idx, package) in report.removed_packages.iter().enumerate() {
            let prefix = if idx == report.removed_packages.len() - 1 { "└──" } else { "├──" };
            writeln!(writer, "  {} {}", prefix.dimmed(), package)?;
        }
    }

    writeln!(writer, "\n{} Finished in {}ms.", "●".bright_blue(), elapsed_ms.to_string().cyan())?;
    writer.flush()?;
    Ok(())
}

pub fn print_cancelled_message<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{} Migration cancelled. No files were changed.", "●".yellow())?;
    writer.flush()?;
    Ok(())
}
