use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use uimigrate_core::{MigrateError, PackageManager, ProjectConfig, Result, detect_package_manager};

#[derive(Debug, Clone, Parser)]
#[command(name = "radix")]
#[command(about = "Migrate @radix-ui/react-* imports to the radix-ui package")]
pub struct Config {
    /// Project directory containing components.json (defaults to the current directory)
    #[arg(long, short = 'c', default_value = ".")]
    pub cwd: PathBuf,

    /// UI components directory, overriding the `ui` alias in components.json
    #[arg(long)]
    pub ui: Option<PathBuf>,

    /// Package manager to run instead of the one detected from the lockfile
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl Config {
    /// Resolve the project directory and load its configuration.
    pub fn project(&self) -> Result<ProjectConfig> {
        let cwd = self.cwd.canonicalize().map_err(|_| {
            MigrateError::Config(format!(
                "The path {} does not exist. Please try again.",
                self.cwd.display()
            ))
        })?;
        info!("Using project directory: {}", cwd.display());

        match &self.ui {
            Some(ui) => {
                debug!("Using ui directory from the command line: {}", ui.display());
                Ok(ProjectConfig::with_ui(&cwd, ui))
            }
            None => ProjectConfig::load(&cwd),
        }
    }

    /// The package manager to run in `project`.
    pub fn resolve_package_manager(&self, project: &ProjectConfig) -> PackageManager {
        self.package_manager.unwrap_or_else(|| detect_package_manager(&project.cwd))
    }
}
