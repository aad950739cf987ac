//! Core utilities for uimigrate migrations.
//!
//! This crate provides the project plumbing shared by every migration:
//! - Loading `components.json` and resolving the `ui` directory through
//!   tsconfig/jsconfig path aliases
//! - Collecting component source files under a directory
//! - Detecting the project's package manager from its lockfile
//! - Running package manager commands
//! - The error type returned by all of the above

mod collector;
mod config;
mod constants;
mod error;
mod package_manager;
mod process;

// Re-export public API
pub use collector::collect_source_files;
pub use config::{
    Aliases, ComponentsJson, ProjectConfig, read_components_json, read_tsconfig_paths,
    resolve_alias,
};
pub use constants::{COMPONENTS_JSON, MISSING_UI_PATH_MESSAGE, SOURCE_EXTENSIONS, TSCONFIG_FILES};
pub use error::{MigrateError, Result};
pub use package_manager::{PackageManager, detect_package_manager};
pub use process::{CommandRunner, SystemRunner, format_command};
