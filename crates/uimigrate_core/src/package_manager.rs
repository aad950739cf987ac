use clap::ValueEnum;
use log::{debug, trace};
use std::{fmt, path::Path};

/// Package managers a project can be driven with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
    Deno,
}

/// Lockfiles in detection order. A directory with several lockfiles resolves
/// to the first entry here.
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("bun.lock", PackageManager::Bun),
    ("bun.lockb", PackageManager::Bun),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("deno.lock", PackageManager::Deno),
    ("package-lock.json", PackageManager::Npm),
    ("npm-shrinkwrap.json", PackageManager::Npm),
];

impl PackageManager {
    /// Executable name.
    pub fn command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Deno => "deno",
        }
    }

    pub fn add_verb(self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            _ => "add",
        }
    }

    pub fn remove_verb(self) -> &'static str {
        match self {
            PackageManager::Npm => "uninstall",
            _ => "remove",
        }
    }

    /// Arguments for adding `packages` as dependencies.
    pub fn add_args<S: AsRef<str>>(self, packages: &[S]) -> Vec<String> {
        verb_args(self.add_verb(), packages)
    }

    /// Arguments for removing `packages` from the dependencies.
    pub fn remove_args<S: AsRef<str>>(self, packages: &[S]) -> Vec<String> {
        verb_args(self.remove_verb(), packages)
    }
}

fn verb_args<S: AsRef<str>>(verb: &str, packages: &[S]) -> Vec<String> {
    std::iter::once(verb.to_string())
        .chain(packages.iter().map(|p| p.as_ref().to_string()))
        .collect()
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Detects the package manager from the nearest lockfile at or above `cwd`.
///
/// Defaults to npm when no lockfile is found.
pub fn detect_package_manager(cwd: &Path) -> PackageManager {
    for dir in cwd.ancestors() {
        trace!("Looking for lockfiles in {}", dir.display());
        for (lockfile, manager) in LOCKFILES {
            if dir.join(lockfile).is_file() {
                debug!("Detected {} from {}", manager, dir.join(lockfile).display());
                return *manager;
            }
        }
    }

    debug!("No lockfile found above {}, defaulting to npm", cwd.display());
    PackageManager::Npm
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_npm_spells_install_and_uninstall() {
        assert_eq!(PackageManager::Npm.add_args(&["radix-ui"]), vec!["install", "radix-ui"]);
        assert_eq!(
            PackageManager::Npm.remove_args(&["@radix-ui/react-dialog", "@radix-ui/react-slot"]),
            vec!["uninstall", "@radix-ui/react-dialog", "@radix-ui/react-slot"]
        );
    }

    #[test]
    fn test_other_managers_spell_add_and_remove() {
        for pm in [
            PackageManager::Pnpm,
            PackageManager::Yarn,
            PackageManager::Bun,
            PackageManager::Deno,
        ] {
            assert_eq!(pm.add_args(&["radix-ui"]), vec!["add", "radix-ui"], "{}", pm);
            assert_eq!(pm.remove_args(&["@radix-ui/react-label"])[0], "remove", "{}", pm);
        }
    }

    #[test]
    fn test_display_is_executable_name() {
        assert_eq!(PackageManager::Pnpm.to_string(), "pnpm");
        assert_eq!(PackageManager::Npm.command(), "npm");
    }

    #[test]
    fn test_detect_from_lockfiles() {
        let cases = [
            ("pnpm-lock.yaml", PackageManager::Pnpm),
            ("yarn.lock", PackageManager::Yarn),
            ("bun.lockb", PackageManager::Bun),
            ("bun.lock", PackageManager::Bun),
            ("deno.lock", PackageManager::Deno),
            ("package-lock.json", PackageManager::Npm),
        ];

        for (lockfile, expected) in cases {
            let temp_dir = TempDir::new().unwrap();
            fs::write(temp_dir.path().join(lockfile), "").unwrap();
            assert_eq!(detect_package_manager(temp_dir.path()), expected, "{}", lockfile);
        }
    }

    #[test]
    fn test_detect_walks_up_to_workspace_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("pnpm-lock.yaml"), "").unwrap();

        let app = root.join("apps").join("web");
        fs::create_dir_all(&app).unwrap();

        assert_eq!(detect_package_manager(&app), PackageManager::Pnpm);
    }

    #[test]
    fn test_nearest_lockfile_wins() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("yarn.lock"), "").unwrap();

        let app = root.join("app");
        fs::create_dir_all(&app).unwrap();
        fs::write(app.join("package-lock.json"), "{}").unwrap();

        assert_eq!(detect_package_manager(&app), PackageManager::Npm);
    }
}
