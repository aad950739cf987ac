use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MigrateError>;

/// Error types for migration runs. Every variant is fatal.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Missing or unusable project configuration. Raised before any file is touched.
    #[error("{0}")]
    Config(String),

    #[error("Failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("Command `{command}` failed: {reason}")]
    Process { command: String, reason: String },
}

impl MigrateError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MigrateError::Io { action, path: path.into(), source }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, MigrateError::Config(_))
    }
}
