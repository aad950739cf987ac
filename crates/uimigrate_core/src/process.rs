use log::{debug, info};
use std::{path::Path, process::Command};

use crate::error::{MigrateError, Result};

/// Runs external commands on behalf of a migration.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, failing on spawn errors and non-zero exits.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()>;
}

/// Runs commands as child processes, capturing their output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        let command = format_command(program, args);
        info!("Running `{}` in {}", command, cwd.display());

        let out = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| MigrateError::Process { command: command.clone(), reason: e.to_string() })?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(MigrateError::Process {
                command,
                reason: format!("{} {}", out.status, stderr.trim()).trim_end().to_string(),
            });
        }

        debug!("`{}` finished: {}", command, String::from_utf8_lossy(&out.stdout).trim());
        Ok(())
    }
}

pub fn format_command(program: &str, args: &[String]) -> String {
    std::iter::once(program).chain(args.iter().map(String::as_str)).collect::<Vec<_>>().join(" ")
}
