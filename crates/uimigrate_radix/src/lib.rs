//! Migration from the per-primitive `@radix-ui/react-*` packages to `radix-ui`.
//!
//! The migration rewrites imports in every component source file under the
//! project's ui directory, then adds `radix-ui` to the project and removes the
//! packages whose imports were rewritten away.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use uimigrate_core::{PackageManager, ProjectConfig, SystemRunner};
//! use uimigrate_radix::{SpinnerReporter, print_summary, run_radix_migration};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let project = ProjectConfig::load(Path::new("/path/to/project"))?;
//! let reporter = SpinnerReporter::new("Migrating to radix-ui...");
//!
//! let report = run_radix_migration(&project, PackageManager::Pnpm, &SystemRunner, &reporter)?;
//! print_summary(&mut std::io::stdout(), &report, 0)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod migrator;
mod reconcile;
mod reporter;
mod rewrite;
mod types;

#[cfg(test)]
mod test_support;

// Re-export public API
pub use config::Config;
pub use migrator::{execute_radix_migration, rewrite_file, rewrite_files, run_radix_migration};
pub use reconcile::reconcile_dependencies;
pub use reporter::{Reporter, SpinnerReporter, print_cancelled_message, print_summary};
pub use rewrite::{LEGACY_PACKAGE_PREFIX, RADIX_UI_PACKAGE, Rewrite, SLOT_PACKAGE, rewrite};
pub use types::{MigrationPlan, MigrationReport, UnusedPackages};
