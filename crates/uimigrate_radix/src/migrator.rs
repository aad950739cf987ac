use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use uimigrate_core::{
    CommandRunner, MigrateError, PackageManager, ProjectConfig, Result, collect_source_files,
};

use crate::{
    reconcile::reconcile_dependencies,
    reporter::Reporter,
    rewrite::rewrite,
    types::{MigrationPlan, MigrationReport, UnusedPackages},
};

impl MigrationPlan {
    /// Resolves the ui directory and collects the files to migrate.
    ///
    /// Fails with a configuration error, before touching anything, when the
    /// project has no usable ui directory.
    pub fn new(project: &ProjectConfig) -> Result<Self> {
        let ui = project.ui_dir()?.to_path_buf();
        info!("Using ui directory: {}", ui.display());

        let files = collect_source_files(&ui)?;
        info!("Found {} files to migrate", files.len());
        Ok(Self { ui, files })
    }
}

/// Plans and runs the migration for `project`, reporting failures to `reporter`.
pub fn run_radix_migration(
    project: &ProjectConfig,
    package_manager: PackageManager,
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
) -> Result<MigrationReport> {
    let plan = MigrationPlan::new(project).inspect_err(|e| reporter.on_failure(e))?;
    execute_radix_migration(project, &plan, package_manager, runner, reporter)
}

/// Rewrites every planned file, then reconciles the project's dependencies.
///
/// Files already rewritten stay rewritten if a later step fails.
pub fn execute_radix_migration(
    project: &ProjectConfig,
    plan: &MigrationPlan,
    package_manager: PackageManager,
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
) -> Result<MigrationReport> {
    info!("Starting radix-ui migration");
    reporter.on_stage("Migrating to radix-ui...");

    match migrate(project, plan, package_manager, runner, reporter) {
        Ok(report) => {
            info!(
                "Migration complete: {} of {} files changed, {} packages removed",
                report.files_changed,
                report.files_scanned,
                report.removed_packages.len()
            );
            reporter.on_success("Migration complete.");
            Ok(report)
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            reporter.on_failure(&e);
            Err(e)
        }
    }
}

fn migrate(
    project: &ProjectConfig,
    plan: &MigrationPlan,
    package_manager: PackageManager,
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
) -> Result<MigrationReport> {
    reporter.on_stage("Replacing imports in files.");
    let unused = UnusedPackages::new();
    let files_changed = rewrite_files(&plan.ui, &plan.files, &unused, reporter)?;
    debug!("{} packages no longer referenced", unused.len());

    reporter.on_stage("Removing unused radix packages.");
    let removed_packages = unused.into_sorted();
    reconcile_dependencies(&project.cwd, package_manager, &removed_packages, runner)?;

    Ok(MigrationReport {
        files_scanned: plan.files.len(),
        files_changed,
        removed_packages,
        package_manager,
    })
}

/// Rewrites `files` (relative to `ui`) in parallel, recording dropped packages in `unused`.
///
/// Returns how many files changed. The first I/O error stops the run.
pub fn rewrite_files(
    ui: &Path,
    files: &[PathBuf],
    unused: &UnusedPackages,
    reporter: &dyn Reporter,
) -> Result<usize> {
    info!("Rewriting {} files in parallel", files.len());

    let changed: Vec<bool> = files
        .par_iter()
        .map(|rel| -> Result<bool> {
            let path = ui.join(rel);
            let changed = rewrite_file(&path, unused)?;
            reporter.on_file_done(&path);
            Ok(changed)
        })
        .collect::<Result<_>>()?;

    Ok(changed.into_iter().filter(|c| *c).count())
}

/// Rewrites one file in place. Unchanged files are not written back.
pub fn rewrite_file(path: &Path, unused: &UnusedPackages) -> Result<bool> {
    trace!("Rewriting {}", path.display());
    let source = fs::read_to_string(path).map_err(|e| MigrateError::io("read", path, e))?;

    let result = rewrite(&source);
    for package in result.unused {
        unused.insert(package);
    }

    if result.content == source {
        trace!("No changes in {}", path.display());
        return Ok(false);
    }

    fs::write(path, result.content).map_err(|e| MigrateError::io("write", path, e))?;
    debug!("Updated imports in {}", path.display());
    Ok(true)
}
