use log::{debug, info};
use std::path::Path;
use uimigrate_core::{CommandRunner, PackageManager, Result};

use crate::rewrite::RADIX_UI_PACKAGE;

/// Adds `radix-ui` to the project, then removes `unused` if there is anything to remove.
///
/// Both commands run in `cwd`. The first failure aborts; nothing is retried.
pub fn reconcile_dependencies(
    cwd: &Path,
    package_manager: PackageManager,
    unused: &[String],
    runner: &dyn CommandRunner,
) -> Result<()> {
    info!("Adding {} with {}", RADIX_UI_PACKAGE, package_manager);
    runner.run(package_manager.command(), &package_manager.add_args(&[RADIX_UI_PACKAGE]), cwd)?;

    if unused.is_empty() {
        debug!("No unused packages to remove");
        return Ok(());
    }

    info!("Removing {} unused packages: {}", unused.len(), unused.join(", "));
    runner.run(package_manager.command(), &package_manager.remove_args(unused), cwd)
}
