use ignore::WalkBuilder;
use log::{debug, trace};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    constants::SOURCE_EXTENSIONS,
    error::{MigrateError, Result},
};

/// Collects every component source file under `root`, as paths relative to `root`.
///
/// Dot-files and dot-directories are skipped; `.gitignore` and friends are not consulted.
/// Symlinked files and directories are followed.
pub fn collect_source_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Collecting source files under {}", root.display());

    let meta = fs::metadata(root).map_err(|e| MigrateError::io("read", root, e))?;
    if !meta.is_dir() {
        return Err(MigrateError::io(
            "read",
            root,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let walker =
        WalkBuilder::new(root).standard_filters(false).hidden(true).follow_links(true).build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = res.map_err(|source| MigrateError::Walk { root: root.to_path_buf(), source })?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        if let Some(ext) = p.extension().and_then(|e| e.to_str())
            && SOURCE_EXTENSIONS.contains(&ext)
            && let Ok(rel) = p.strip_prefix(root)
        {
            trace!("Found source file: {}", rel.display());
            files.push(rel.to_path_buf());
        }
    }

    files.sort();
    debug!("Collected {} source files", files.len());
    Ok(files)
}
