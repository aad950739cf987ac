use dashmap::DashSet;
use std::path::PathBuf;
use uimigrate_core::PackageManager;

/// Packages found unreferenced after rewriting. Safe to fill from many threads.
#[derive(Debug, Default)]
pub struct UnusedPackages {
    inner: DashSet<String>,
}

impl UnusedPackages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the package was not recorded before.
    pub fn insert(&self, package: impl Into<String>) -> bool {
        self.inner.insert(package.into())
    }

    pub fn contains(&self, package: &str) -> bool {
        self.inner.contains(package)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Consumes the set, returning its packages sorted by name.
    pub fn into_sorted(self) -> Vec<String> {
        let mut packages: Vec<String> = self.inner.into_iter().collect();
        packages.sort();
        packages
    }
}

/// Files selected for a migration run.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    /// Absolute ui directory
    pub ui: PathBuf,
    /// Source files relative to `ui`
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub files_scanned: usize,
    pub files_changed: usize,
    /// Sorted; empty when no uninstall command was run
    pub removed_packages: Vec<String>,
    pub package_manager: PackageManager,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_insert_deduplicates() {
        let unused = UnusedPackages::new();
        assert!(unused.insert("@radix-ui/react-dialog"));
        assert!(!unused.insert("@radix-ui/react-dialog"));
        assert_eq!(unused.len(), 1);
        assert!(unused.contains("@radix-ui/react-dialog"));
    }

    #[test]
    fn test_into_sorted() {
        let unused = UnusedPackages::new();
        unused.insert("@radix-ui/react-tooltip");
        unused.insert("@radix-ui/react-dialog");
        unused.insert("@radix-ui/react-slot");

        assert_eq!(
            unused.into_sorted(),
            vec!["@radix-ui/react-dialog", "@radix-ui/react-slot", "@radix-ui/react-tooltip"]
        );
    }

    #[test]
    fn test_concurrent_inserts() {
        let unused = UnusedPackages::new();
        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    unused.insert("@radix-ui/react-label");
                    unused.insert("@radix-ui/react-switch");
                });
            }
        });

        assert_eq!(unused.len(), 2);
    }

    #[test]
    fn test_empty() {
        let unused = UnusedPackages::new();
        assert!(unused.is_empty());
        assert!(unused.into_sorted().is_empty());
    }
}
