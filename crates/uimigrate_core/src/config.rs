use log::{debug, info, trace, warn};
use path_clean::clean;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    constants::{COMPONENTS_JSON, MISSING_UI_PATH_MESSAGE, TSCONFIG_FILES},
    error::{MigrateError, Result},
};

/// The parts of `components.json` migrations care about. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentsJson {
    #[serde(default)]
    pub aliases: Aliases,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Aliases {
    pub components: Option<String>,
    pub ui: Option<String>,
}

/// A project resolved from its `components.json`.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Project root; package manager commands run here
    pub cwd: PathBuf,
    /// Absolute path of the UI components directory, if one could be resolved
    pub ui: Option<PathBuf>,
}

impl ProjectConfig {
    /// Load `components.json` from `cwd` and resolve the `ui` alias to a directory.
    ///
    /// Falls back to `<components alias>/ui` when no `ui` alias is configured.
    pub fn load(cwd: &Path) -> Result<Self> {
        let components = read_components_json(cwd)?;
        let paths = read_tsconfig_paths(cwd);

        let ui = match (&components.aliases.ui, &components.aliases.components) {
            (Some(ui), _) => Some(resolve_alias(cwd, &paths, ui)),
            (None, Some(components)) => Some(resolve_alias(cwd, &paths, components).join("ui")),
            (None, None) => {
                warn!("{} defines neither a `ui` nor a `components` alias", COMPONENTS_JSON);
                None
            }
        };
        info!("Resolved ui path: {:?}", ui);

        Ok(Self { cwd: cwd.to_path_buf(), ui })
    }

    /// Build a config from an explicit ui directory. Relative paths are taken from `cwd`.
    pub fn with_ui(cwd: &Path, ui: &Path) -> Self {
        let ui = if ui.is_absolute() { ui.to_path_buf() } else { cwd.join(ui) };
        Self { cwd: cwd.to_path_buf(), ui: Some(clean(ui)) }
    }

    /// The ui directory, or a configuration error if it is missing or not a directory.
    pub fn ui_dir(&self) -> Result<&Path> {
        match &self.ui {
            Some(ui) if ui.is_dir() => Ok(ui),
            Some(ui) => {
                debug!("Configured ui path is not a directory: {}", ui.display());
                Err(MigrateError::Config(MISSING_UI_PATH_MESSAGE.to_string()))
            }
            None => Err(MigrateError::Config(MISSING_UI_PATH_MESSAGE.to_string())),
        }
    }
}

pub fn read_components_json(cwd: &Path) -> Result<ComponentsJson> {
    let path = cwd.join(COMPONENTS_JSON);
    debug!("Reading {}", path.display());
    if !path.is_file() {
        return Err(MigrateError::Config(format!(
            "No `{}` file found in {}. Run this command from your project root or pass --ui.",
            COMPONENTS_JSON,
            cwd.display()
        )));
    }

    let content = fs::read_to_string(&path).map_err(|e| MigrateError::io("read", &path, e))?;
    serde_json::from_str(&content).map_err(|e| {
        MigrateError::Config(format!("Invalid configuration found in {}: {}", path.display(), e))
    })
}

/// Reads `compilerOptions.paths` from the project's tsconfig (or jsconfig).
///
/// Keys and targets have their trailing `/*` removed; targets are joined onto
/// `baseUrl` relative to the config file. A missing or unparseable config yields no aliases.
pub fn read_tsconfig_paths(cwd: &Path) -> HashMap<String, Vec<PathBuf>> {
    let mut paths = HashMap::new();

    let Some(tsconfig_path) =
        TSCONFIG_FILES.iter().map(|name| cwd.join(name)).find(|p| p.is_file())
    else {
        debug!("No tsconfig.json or jsconfig.json in {}", cwd.display());
        return paths;
    };
    trace!("Found compiler config at: {:?}", tsconfig_path);

    let Ok(mut content) = fs::read_to_string(&tsconfig_path) else {
        warn!("Could not read {}", tsconfig_path.display());
        return paths;
    };
    if json_strip_comments::strip(&mut content).is_err() {
        warn!("Could not strip comments from {}", tsconfig_path.display());
        return paths;
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content)
        && let Some(compiler_options) = json.get("compilerOptions")
        && let Some(paths_obj) = compiler_options.get("paths").and_then(|p| p.as_object())
    {
        let base_url = compiler_options.get("baseUrl").and_then(|b| b.as_str()).unwrap_or(".");
        let base_path = cwd.join(base_url);

        for (alias, targets) in paths_obj {
            let resolved_targets: Vec<PathBuf> = targets
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(|t| t.as_str())
                .map(|t| clean(base_path.join(t.trim_end_matches("/*"))))
                .collect();

            if !resolved_targets.is_empty() {
                let alias_key = alias.trim_end_matches("/*").to_string();
                trace!("Found path alias: '{}' -> {:?}", alias_key, resolved_targets);
                paths.insert(alias_key, resolved_targets);
            }
        }
    }

    debug!("Loaded {} path aliases", paths.len());
    paths
}

/// Resolves an import alias such as `@/components/ui` to an absolute path.
///
/// The longest matching path alias wins; an alias that matches nothing is
/// treated as a path relative to `cwd`.
pub fn resolve_alias(cwd: &Path, paths: &HashMap<String, Vec<PathBuf>>, alias: &str) -> PathBuf {
    let best = paths
        .iter()
        .filter(|(key, _)| {
            alias == key.as_str()
                || alias.strip_prefix(key.as_str()).is_some_and(|rest| rest.starts_with('/'))
        })
        .filter_map(|(key, targets)| targets.first().map(|target| (key, target)))
        .max_by_key(|(key, _)| key.len());

    match best {
        Some((key, target)) => {
            let remainder = alias[key.len()..].trim_start_matches('/');
            trace!("Alias '{}' matched path mapping '{}'", alias, key);
            if remainder.is_empty() { target.clone() } else { clean(target.join(remainder)) }
        }
        None => {
            trace!("Alias '{}' matched no path mapping, resolving from cwd", alias);
            clean(cwd.join(alias))
        }
    }
}
